pub fn gcd_signed(mut a: i64, mut b: i64) -> u64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs()
}

/// Return the largest power of two that does not exceed `n`, or 0 if `n` is 0.
pub fn highest_power_of_two(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        1 << (u64::BITS - 1 - n.leading_zeros())
    }
}
