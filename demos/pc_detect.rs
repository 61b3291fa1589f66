use grow_fpm::{Sensor, DEFAULT_BAUD_RATE};
use serialport::{available_ports, open};
use std::{cell::RefCell, env, time::Duration};

mod pc_utils;
use pc_utils::{SerialReader, SerialWriter, StdDelay};

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => print_ports(),
        2 => detect(args[1].as_str()),
        _ => panic!("Usage: pc_detect [port_name]"),
    };
}

fn print_ports() {
    let ports = available_ports().unwrap();
    for port in ports {
        println!("Available port: {} ({:#?})", port.port_name, port.port_type);
    }
}

fn detect(port_name: &str) {
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
    println!(
        "Templates enrolled: {}/{}",
        sensor.template_count(),
        sensor.max_capacity()
    );

    match sensor.system_parameters() {
        Some(params) => println!(
            "Module reports: library size {}, security level {}, baud code {}",
            params.finger_library_size, params.security_level, params.baud_setting
        ),
        None => println!("Module did not answer the configuration query"),
    }
}
