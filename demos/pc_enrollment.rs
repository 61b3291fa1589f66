use grow_fpm::{status, Sensor, DEFAULT_BAUD_RATE};
use serialport::{available_ports, open};
use std::{cell::RefCell, env, time::Duration};

mod pc_utils;
use pc_utils::{SerialReader, SerialWriter, StdDelay};

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => print_ports(),
        3 => enroll_to_id(args[1].as_str(), args[2].parse::<u16>().unwrap()),
        _ => panic!("Usage: pc_enrollment [port_name] [location]"),
    };
}

fn print_ports() {
    let ports = available_ports().unwrap();
    for port in ports {
        println!("Available port: {} ({:#?})", port.port_name, port.port_type);
    }
}

fn enroll_to_id(port_name: &str, location: u16) {
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
    assert!(
        location < sensor.max_capacity(),
        "Location {} is out of range for this sensor",
        location
    );

    println!("1. Place a finger on the sensor");
    capture_into_buffer(&mut sensor, 1);

    println!("2. Remove the finger");
    while sensor.get_image() != status::NO_FINGER {}

    println!("3. Place the same finger again");
    capture_into_buffer(&mut sensor, 2);

    println!("4. Combining the two captures");
    let code = sensor.create_model();
    if code != status::OK {
        panic!("Captures did not match (code {:#04x})", code);
    }

    println!("5. Storing at location {}", location);
    let code = sensor.store_model(location);
    if code != status::OK {
        panic!("Store failed (code {:#04x})", code);
    }
    println!("Enrolled. {} templates on the module", sensor.template_count());
}

fn capture_into_buffer<TX, RX>(sensor: &mut Sensor<TX, RX>, buffer: u8)
where
    TX: embedded_hal::serial::Write<u8>,
    RX: embedded_hal::serial::Read<u8>,
{
    loop {
        match sensor.get_image() {
            status::OK => break,
            status::NO_FINGER => print!("."),
            _ => print!("!"),
        }
    }
    println!();

    let code = sensor.image_to_char(buffer);
    if code != status::OK {
        panic!("Image processing failed (code {:#04x})", code);
    }
}
