mod tests;

use std::io::{self, Write};

use scopex::prelude::*;
use scopex_link_serial::{SerialLink, SerialLinkOption, SerialPorts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let (timer, events) = TokioTimer::new();
    let mut session = Session::new(
        SerialLink::new(SerialLinkOption::default()),
        timer,
        SerialPorts,
        SessionOption::default(),
    );

    let ports = session.available_ports();
    if ports.is_empty() {
        anyhow::bail!("No serial port found");
    }
    ports.iter().enumerate().for_each(|(i, name)| {
        println!("[{i}]: {name}");
    });
    print!("Choose port: ");
    io::stdout().flush()?;

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    let port = s
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| ports.get(i))
        .ok_or_else(|| anyhow::anyhow!("Invalid port number: {}", s.trim()))?;
    session.connect(port)?;

    tests::run(session, events).await
}
