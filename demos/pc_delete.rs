use grow_fpm::{status, Sensor, DEFAULT_BAUD_RATE};
use serialport::{available_ports, open, SerialPort};
use std::{cell::RefCell, env, time::Duration};

mod pc_utils;
use pc_utils::{SerialReader, SerialWriter, StdDelay};

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => print_ports(),
        3 if args[2] == "all" => empty_database(args[1].as_str()),
        3 => delete_id(args[1].as_str(), args[2].parse::<u16>().unwrap()),
        _ => panic!("Usage: pc_delete [port_name location|all]"),
    };
}

fn print_ports() {
    let ports = available_ports().unwrap();
    for port in ports {
        println!("Available port: {} ({:#?})", port.port_name, port.port_type);
    }
}

fn delete_id(port_name: &str, location: u16) {
    let port = get_configured_serial_port(port_name).unwrap();
    let port_cell = RefCell::new(port);

    let reader = SerialReader(&port_cell);
    let writer = SerialWriter(&port_cell);
    let mut sensor = Sensor::new(writer, reader);

    if !sensor.begin(&mut StdDelay) {
        panic!("Handshake failed - check wiring and password");
    }

    let code = sensor.delete_model(location);
    if code != status::OK {
        panic!("Delete failed (code {:#04x})", code);
    }
    println!(
        "Deleted location {}. {} templates remain",
        location,
        sensor.template_count()
    );
}

fn empty_database(port_name: &str) {
    let port = get_configured_serial_port(port_name).unwrap();
    let port_cell = RefCell::new(port);

    let reader = SerialReader(&port_cell);
    let writer = SerialWriter(&port_cell);
    let mut sensor = Sensor::new(writer, reader);

    if !sensor.begin(&mut StdDelay) {
        panic!("Handshake failed - check wiring and password");
    }

    let code = sensor.empty_database();
    if code != status::OK {
        panic!("Empty failed (code {:#04x})", code);
    }
    println!("Library cleared on {}", sensor.sensor_name());
}

fn get_configured_serial_port(port_name: &str) -> serialport::Result<Box<dyn SerialPort>> {
    println!("Using port {}", port_name);
    open(port_name).map(|mut port| {
        port.set_baud_rate(DEFAULT_BAUD_RATE).unwrap();
        port.set_timeout(Duration::from_secs(5)).unwrap();
        port
    })
}
