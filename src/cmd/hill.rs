use hillcipher::cli::main::run_cli;

fn main() {
    run_cli();
}
