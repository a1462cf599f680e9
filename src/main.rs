use mesh_address_explainer::output::{print_classification, print_nn_ips};
use mesh_address_explainer::{expected_addresses, explain_address};
use std::error::Error;
use std::net::Ipv4Addr;

fn main() -> Result<(), Box<dyn Error>> {
    // Keep main thin, it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");

    log::info!("#Start main()");

    let arg = std::env::args()
        .nth(1)
        .ok_or("Usage: mesh-address-explainer <ipv4-address>")?;
    let addr: Ipv4Addr = arg
        .parse()
        .map_err(|_| format!("Invalid IPv4 address: {arg}"))?;

    let result = explain_address(addr)?;
    print_classification(&result);

    if let Some(nn) = result.network_number {
        let ips = expected_addresses(nn)?;
        print_nn_ips(nn, &ips);
    }

    Ok(())
}
