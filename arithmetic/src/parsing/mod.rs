use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXPRESSION_REGEX: Regex = Regex::new(r"^\s*(-?\d+)\s*([+\-*/])\s*(-?\d+)\s*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

///Parses a binary integer expression like "12 / 4" into its two operands and
///the operator between them. Operands may be negative, whitespace is free.
pub fn parse_expression(input: &str) -> Result<(i32, Operator, i32), String> {
    let captures = EXPRESSION_REGEX
        .captures(input)
        .ok_or_else(|| format!("Could not parse expression: {:?}", input))?;

    let lhs = parse_operand(captures.get(1).map_or("", |m| m.as_str()))?;
    let symbol = captures.get(2).map_or("", |m| m.as_str());
    let operator = Operator::from_symbol(symbol)
        .ok_or_else(|| format!("Unknown operator: {:?}", symbol))?;
    let rhs = parse_operand(captures.get(3).map_or("", |m| m.as_str()))?;

    Ok((lhs, operator, rhs))
}

fn parse_operand(digits: &str) -> Result<i32, String> {
    digits
        .parse::<i32>()
        .map_err(|e| format!("Could not parse operand {:?}: {}", digits, e))
}
