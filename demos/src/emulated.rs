mod tests;

use scopex::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let (timer, events) = TokioTimer::new();
    let mut session = Session::new(
        Nop::new(),
        timer,
        vec!["EMU0".to_string()],
        SessionOption::default(),
    );
    session.connect("EMU0")?;

    tests::run(session, events).await
}
