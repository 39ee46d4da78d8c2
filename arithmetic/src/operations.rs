use intcalc_debug_output::print_debug;

pub fn add(a: i32, b: i32) -> i32 {
    print_debug("Adding numbers");
    // wrapping_* keeps overflow behavior the same in debug and release profiles
    a.wrapping_add(b)
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Truncating integer division. A zero divisor is not an error here: the
/// result is 0, indistinguishable from a real zero quotient.
pub fn divide(a: i32, b: i32) -> i32 {
    if b != 0 {
        a.wrapping_div(b)
    } else {
        0 // return 0 for divide by zero
    }
}
