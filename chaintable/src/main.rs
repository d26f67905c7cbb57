//! Small CLI around the table: inspect slot placement for a key, or replay a
//! JSON script of operations and print the outcomes.

use std::env;

use chaintable::config::load_script;
use chaintable::index::{sha256_hex, slot_index};
use chaintable::logger::initialize_logger;
use chaintable::script::run;

fn print_usage() {
    eprintln!("Commands:\n  index <key>\n  digest <key>\n  run <script.json>");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "index" => {
            if args.len() != 3 {
                return print_usage();
            }
            println!("{}", slot_index(&args[2]));
        }
        "digest" => {
            if args.len() != 3 {
                return print_usage();
            }
            println!("{}", sha256_hex(args[2].as_bytes()));
        }
        "run" => {
            if args.len() != 3 {
                return print_usage();
            }
            let script = match load_script(&args[2]) {
                Ok(script) => script,
                Err(err) => return eprintln!("script load failed: {err}"),
            };
            initialize_logger(script.log_level.as_deref());
            match run(&script) {
                Ok(outcomes) => match serde_json::to_string_pretty(&outcomes) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(err) => eprintln!("rendering outcomes failed: {err}"),
                },
                Err(err) => eprintln!("replay failed: {err}"),
            }
        }
        _ => print_usage(),
    }
}
