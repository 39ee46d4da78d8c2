use crate::operations::{add, divide, multiply, subtract};
use crate::parsing::{parse_expression, Operator};

pub fn evaluate_expression(expression: &str) -> Result<i32, String> {
    let (lhs, operator, rhs) = parse_expression(expression)?;
    Ok(apply_operator(lhs, operator, rhs))
}

fn apply_operator(lhs: i32, operator: Operator, rhs: i32) -> i32 {
    match operator {
        Operator::Add => add(lhs, rhs),
        Operator::Subtract => subtract(lhs, rhs),
        Operator::Multiply => multiply(lhs, rhs),
        Operator::Divide => divide(lhs, rhs),
    }
}
