use ethers::types::U256;

pub const GWEI_DECIMALS: u32 = 9;

pub const NATIVE_DECIMALS: u32 = 18;

pub const DEFAULT_COST_PRECISION: usize = 6;

// Checksum casing is not enforced.
pub fn is_valid_address(address: &str) -> bool {
    is_prefixed_hex(address, 40)
}

fn is_prefixed_hex(value: &str, digits: usize) -> bool {
    match value.strip_prefix("0x") {
        Some(rest) => rest.len() == digits && rest.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

pub fn short_address(address: &str) -> String {
    if !is_valid_address(address) {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

// Integer-only, half-up rounding.
pub fn to_fixed(amount: U256, decimals: u32, precision: usize) -> String {
    let precision_u32 = precision as u32;

    let scaled = if precision_u32 >= decimals {
        amount.saturating_mul(U256::exp10((precision_u32 - decimals) as usize))
    } else {
        let divisor = U256::exp10((decimals - precision_u32) as usize);
        let (quotient, remainder) = amount.div_mod(divisor);
        if remainder * U256::from(2u8) >= divisor {
            quotient + U256::one()
        } else {
            quotient
        }
    };

    let digits = scaled.to_string();
    if precision == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = precision + 1);
    let (whole, fraction) = padded.split_at(padded.len() - precision);
    format!("{}.{}", whole, fraction)
}

pub fn wei_to_gwei_string(wei: U256) -> String {
    to_fixed(wei, GWEI_DECIMALS, 2)
}

pub fn wei_to_native_f64(wei: U256) -> f64 {
    ethers::utils::format_ether(wei).parse().unwrap_or(0.0)
}
