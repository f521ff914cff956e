//! `gamers-console` binary.

fn main() -> std::process::ExitCode {
	gamers_console::cli::main()
}
