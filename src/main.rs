//! Sorting visualizer CLI - Animate a sort in the terminal.

use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use sort_visualizer::{
    animation::{FrameView, PlaybackController, PlaybackDriver, PlaybackStatus, record},
    schema::{Algorithm, MAX_SPEED, MIN_SPEED, ValueRange, VisualizerConfig},
};

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let flags: Vec<&str> = args[1..]
        .iter()
        .map(String::as_str)
        .filter(|a| a.starts_with("--"))
        .collect();
    let positional: Vec<&str> = args[1..]
        .iter()
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();

    if flags.contains(&"--example") {
        print_example_config();
        return;
    }

    if positional.is_empty() {
        print_usage(&args[0]);
        process::exit(1);
    }

    let mut config = load_config(positional[0]).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    if let Some(size) = positional.get(1).and_then(|s| s.parse().ok()) {
        config.array_size = size;
    }
    if let Some(speed) = positional.get(2).and_then(|s| s.parse().ok()) {
        config.speed = speed;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if flags.contains(&"--frames") {
        dump_frames(&config);
        return;
    }

    let info = config.algorithm.info();
    println!("{}", info.name);
    println!("{}", "=".repeat(info.name.chars().count()));
    println!("Time complexity:  {}", info.time_complexity);
    println!("Space complexity: {}", info.space_complexity);
    println!(
        "Stability:        {}",
        if info.stable { "Stable" } else { "Unstable" }
    );
    println!(
        "Array size: {}, speed: {} ({:?} per frame)",
        config.array_size,
        config.speed,
        config.pace()
    );
    println!();

    let range = config.values;
    let mut controller = PlaybackController::new(config.clone()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    controller.subscribe(move |view| render(view, range));
    let mut driver = PlaybackDriver::new(controller);

    if flags.contains(&"--interactive") {
        run_interactive(&mut driver, config.speed);
    } else {
        run_once(&mut driver);
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <algorithm|config.json> [size] [speed] [--frames] [--interactive]",
        program
    );
    eprintln!();
    eprintln!("Animate a sorting algorithm in the terminal.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  algorithm      bubble, insertion or selection");
    eprintln!("  config.json    Path to a visualizer configuration file");
    eprintln!("  size           Number of bars (default: 50)");
    eprintln!("  speed          Playback speed 1-100 (default: 50)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --frames       Print the recorded frames as JSON instead of playing");
    eprintln!("  --interactive  Read commands from stdin while playing");
    eprintln!("  --example      Print an example configuration");
}

fn load_config(arg: &str) -> Result<VisualizerConfig, Box<dyn std::error::Error>> {
    if let Ok(algorithm) = arg.parse::<Algorithm>() {
        return Ok(VisualizerConfig {
            algorithm,
            ..Default::default()
        });
    }
    if Path::new(arg).exists() {
        return Ok(VisualizerConfig::load(arg)?);
    }
    Err(format!("'{}' is neither an algorithm nor a config file", arg).into())
}

fn dump_frames(config: &VisualizerConfig) {
    let mut source = sort_visualizer::ArraySource::from_config(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let input = source.generate(config.array_size);
    let frames = record(config.algorithm, &input).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    match serde_json::to_string_pretty(&frames) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing frames: {}", e);
            process::exit(1);
        }
    }
}

fn run_once(driver: &mut PlaybackDriver) {
    match driver.start() {
        Ok(true) => driver.wait(),
        Ok(false) => eprintln!("Nothing to play"),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
    let stats = driver.with_controller(|c| c.frames().map(|f| f.stats()));
    if let Some(stats) = stats {
        println!();
        println!("Done: {}", stats);
    }
}

fn run_interactive(driver: &mut PlaybackDriver, mut speed: u32) {
    println!("Commands: s=start p=pause/resume r=reset g=new array +/-=speed");
    println!("          size <n>, algo <name>, q=quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let argument = words.next();

        let accepted = match command {
            "s" | "start" => match driver.start() {
                Ok(started) => started,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    false
                }
            },
            "p" | "pause" | "resume" => driver.toggle_pause(),
            "r" | "reset" => {
                driver.reset();
                true
            }
            "g" | "generate" => driver.generate_new_array(),
            "+" | "-" => {
                speed = if command == "+" {
                    (speed + 10).min(MAX_SPEED)
                } else {
                    speed.saturating_sub(10).max(MIN_SPEED)
                };
                driver.set_speed(speed);
                println!("speed {}", speed);
                true
            }
            "size" => match argument.and_then(|a| a.parse().ok()) {
                Some(size) => driver.set_array_size(size),
                None => false,
            },
            "algo" => match argument.map(str::parse::<Algorithm>) {
                Some(Ok(algorithm)) => driver.set_algorithm(algorithm),
                _ => false,
            },
            "q" | "quit" => break,
            "" => continue,
            other => {
                eprintln!("Unknown command '{}'", other);
                continue;
            }
        };

        if !accepted {
            let controls = driver.with_controller(|c| c.controls());
            println!("'{}' not available now ({:?})", command, controls);
        }
    }
    driver.reset();
}

fn render(view: &FrameView<'_>, range: ValueRange) {
    let span = (range.max.saturating_sub(range.min)).max(1) as usize;
    let bars: String = view
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let level = (v.saturating_sub(range.min) as usize * (GLYPHS.len() - 1)) / span;
            let glyph = GLYPHS[level.min(GLYPHS.len() - 1)];
            let color = if view.sorted.contains(&i) {
                "32"
            } else if view.comparing.contains(i) {
                "31"
            } else {
                "34"
            };
            format!("\x1b[{}m{}\x1b[0m", color, glyph)
        })
        .collect();

    let status = match view.status {
        PlaybackStatus::Idle => "idle",
        PlaybackStatus::Running => "run ",
        PlaybackStatus::Paused => "wait",
        PlaybackStatus::Finished => "done",
    };
    println!(
        "[{:>5}/{:<5}] {} {}",
        view.cursor + usize::from(view.frame_count > 0),
        view.frame_count,
        status,
        bars
    );
}

fn print_example_config() {
    let config = VisualizerConfig {
        random_seed: Some(42),
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
