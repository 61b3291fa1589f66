use grow_fpm::{status, Sensor, DEFAULT_BAUD_RATE};
use serialport::{available_ports, open};
use std::{cell::RefCell, env, time::Duration};

mod pc_utils;
use pc_utils::{SerialReader, SerialWriter, StdDelay};

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => print_ports(),
        2 => run_search(args[1].as_str()),
        _ => panic!("Usage: pc_fingerprint_search [port_name]"),
    };
}

fn print_ports() {
    let ports = available_ports().unwrap();
    for port in ports {
        println!("Available port: {} ({:#?})", port.port_name, port.port_type);
    }
}

fn run_search(port_name: &str) {
    println!("Using port {}", port_name);
    let mut port = open(port_name).unwrap();
    port.set_baud_rate(DEFAULT_BAUD_RATE).unwrap();
    port.set_timeout(Duration::from_secs(5)).unwrap();

    let port_cell = RefCell::new(port);

    let reader = SerialReader(&port_cell);
    let writer = SerialWriter(&port_cell);
    let mut sensor = Sensor::new(writer, reader);

    if !sensor.begin(&mut StdDelay) {
        panic!("Handshake failed - check wiring and password");
    }
    println!("Fingerprint sensor: {}", sensor.sensor_name());

    println!("1. Place a finger on the sensor");
    loop {
        match sensor.get_image() {
            status::OK => break,
            status::NO_FINGER => print!("."),
            _ => print!("!"),
        }
    }
    println!();

    println!("2. Processing the image");
    let code = sensor.image_to_char(1);
    if code != status::OK {
        panic!("Image processing failed (code {:#04x})", code);
    }

    println!("3. Searching the library");
    let outcome = sensor.fast_search();
    match outcome.matched {
        Some(hit) => println!(
            "Matched template {} with confidence {}",
            hit.finger_id, hit.confidence
        ),
        None => println!("No match (code {:#04x})", outcome.status),
    }
}
