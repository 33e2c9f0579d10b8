use std::io::{self, BufRead};
use std::process;

use clap::{Arg, ArgAction, Command};

use nthprime::{generate_with_capacity, group_digits, Grouping, PrimeError, DEFAULT_CAPACITY};

fn main() {
    let matches = Command::new("nthprime")
        .about("Finds prime numbers by trial division")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("count")
                .value_name("COUNT")
                .help("How many primes to find (asked on stdin if omitted)"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Print every prime found, one per line"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .action(ArgAction::SetTrue)
                .help("No thousands separators in the report line"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .value_name("N")
                .help("Largest count to allow (default 10000)"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug mode"),
        )
        .get_matches();

    let debug = matches.get_flag("debug");

    let capacity = match matches.get_one::<String>("capacity") {
        Some(raw) => match raw.parse::<usize>() {
            Ok(c) => c,
            Err(_) => {
                eprintln!("[error] {}", PrimeError::MalformedInput(raw.clone()));
                process::exit(1);
            }
        },
        None => DEFAULT_CAPACITY,
    };

    // Count from argv, or interactively like the original program
    let raw_count = match matches.get_one::<String>("count") {
        Some(arg) => arg.clone(),
        None => match read_count_from_stdin() {
            Some(line) => line,
            None => {
                eprintln!("[error] no count given");
                process::exit(1);
            }
        },
    };

    // Negative counts behave like zero: nothing to find
    let n = match raw_count.trim().parse::<i64>() {
        Ok(v) if v <= 0 => 0,
        Ok(v) => v as usize,
        Err(_) => {
            eprintln!(
                "[error] {}",
                PrimeError::MalformedInput(raw_count.trim().to_string())
            );
            process::exit(1);
        }
    };

    if debug {
        eprintln!("[debug] n={} capacity={}", n, capacity);
    }

    let primes = match generate_with_capacity(n, capacity) {
        Ok(primes) => primes,
        Err(err) => {
            eprintln!("[error] {}", err);
            process::exit(1);
        }
    };

    if matches.get_flag("all") {
        for p in &primes {
            println!("{} is prime", p);
        }
        return;
    }

    let grouping = if matches.get_flag("plain") {
        Grouping::None
    } else {
        Grouping::comma()
    };

    match primes.last() {
        Some(&nth) => {
            println!(
                "{} is the {}th prime",
                group_digits(nth, grouping),
                group_digits(n as u64, grouping)
            );
        }
        None => {
            eprintln!("[error] {}", PrimeError::InvalidCount);
            process::exit(1);
        }
    }
}

fn read_count_from_stdin() -> Option<String> {
    println!("What prime are you looking for?");
    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            eprintln!("[error] reading stdin: {}", err);
            None
        }
    }
}
