use parlor::adventure::Game;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "adventure {} ({})",
                    parlor::build_info::BUILD_DATE,
                    parlor::build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Adventure - A Small Text Adventure\n");
                println!("Usage: adventure [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'adventure --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    Game::new()?.run()
}
