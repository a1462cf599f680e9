//! Terminal rendering of classification results.

use crate::models::{ClassificationResult, NnIpsResult};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the breakdown of one address.
pub fn print_classification(result: &ClassificationResult) {
    let dotted = result.address_octets.iter().join(".");
    println!("{}", format!("# {dotted}").on_blue());

    println!("provenance: {}", result.address_provenance);
    println!("type:       {}", result.address_type);

    if let Some(category) = result.static_address_category {
        println!("category:   {}", category);
    }
    if let Some(nn) = result.network_number {
        println!("network #:  {}", nn.to_string().green());
    }
    if let Some(index) = result.router_index {
        println!("router:     {}", index);
    }
    if let Some(derivation) = &result.dhcp_derivation {
        println!(
            "derivation: {} -> {} = {} / 64 -> NN {}",
            derivation.component_hex,
            derivation.offset_hex,
            derivation.offset,
            derivation.network_number
        );
    }
}

/// Print every address a network number is conventionally assigned.
pub fn print_nn_ips(nn: u32, result: &NnIpsResult) {
    println!("{}", format!("# Addresses for NN {nn}").on_blue());

    for explained in &result.addresses {
        println!(
            "{addr} {desc}",
            addr = format_field(explained.address, 18),
            desc = explained.description
        );
    }
    for block in &result.cidrs {
        println!(
            "{cidr} {desc} (active {lo} - {hi})",
            cidr = format_field(format!("{}/{}", block.address, block.length), 18),
            desc = block.description,
            lo = block.active_subset.0,
            hi = block.active_subset.1
        );
    }
}
