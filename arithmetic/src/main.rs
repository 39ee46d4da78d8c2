use intcalc_arithmetic::evaluate_expression;
use intcalc_debug_output::debug_print;
use std::{env, io};

fn display_menu() -> String {
    println!("No expression provided (give one like \"12 / 4\" on the command line when running). Please select an option:");
    println!("1. Enter an expression to evaluate");
    println!("2. Run with hard-coded expression 2 + 3");
    println!("3. Run with hard-coded expression 7 / 0");

    let mut input = String::new();
    io::stdin().read_line(&mut input).expect("Failed to read line");

    match input.trim() {
        "1" => {
            println!("Enter expression:");
            let mut expression = String::new();
            io::stdin().read_line(&mut expression).expect("Failed to read line");
            expression
        }
        "2" => "2 + 3".to_owned(),
        "3" => "7 / 0".to_owned(),
        _ => { println!("Invalid option"); std::process::exit(1); }
    }
}

fn evaluate_input(expression: &str) {
    debug_print!("evaluating {:?}", expression);
    match evaluate_expression(expression) {
        Ok(result) => println!("{} = {}", expression, result),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        evaluate_input(args[1..].join(" ").trim());
    } else {
        let expression = display_menu();
        evaluate_input(expression.trim());
    }
}
