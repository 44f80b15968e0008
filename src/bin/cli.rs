//! mpdkit CLI
//!
//! Forwards commands from the shell to an MPD server.

use clap::{Parser, Subcommand};
use mpdkit::protocol::commands;
use mpdkit::{Client, Config, Reply};
use tracing_subscriber::{fmt, EnvFilter};

/// mpdkit CLI
#[derive(Parser, Debug)]
#[command(name = "mpdkit-cli")]
#[command(about = "Send commands to an MPD server")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(long, default_value = mpdkit::config::DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = mpdkit::DEFAULT_PORT)]
    port: u16,

    /// Password sent after connecting
    #[arg(long)]
    password: Option<String>,

    /// Read timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value = "0")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Forward one command with its arguments
    Send {
        /// Command name, e.g. `play` or `status`
        name: String,

        /// Positional arguments
        args: Vec<String>,
    },

    /// Pause if playing, otherwise play
    Toggle,

    /// List the known commands and their arguments
    Commands,
}

fn main() {
    // Logs go to stderr so command output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mpdkit=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .host(&args.host)
        .port(args.port)
        .read_timeout_ms(args.timeout_ms);
    if let Some(password) = &args.password {
        builder = builder.password(password);
    }
    let config = builder.build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(config, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, command: Commands) -> mpdkit::Result<()> {
    match command {
        Commands::Commands => {
            for spec in commands() {
                println!("{:<20} {}", spec.name, spec.usage());
            }
            Ok(())
        }
        Commands::Send { name, args } => {
            let mut client = connect(config)?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let reply = client.send(&name, &args)?;
            print_reply(&reply);
            client.disconnect()
        }
        Commands::Toggle => {
            let mut client = connect(config)?;
            let status = client.send("status", &[])?;
            if status.first().and_then(|r| r.get("state")) == Some("play") {
                client.send("pause", &["1"])?;
            } else {
                client.send("play", &[])?;
            }
            client.disconnect()
        }
    }
}

fn connect(config: Config) -> mpdkit::Result<Client> {
    let mut client = Client::new(config);
    let greeting = client.connect()?;
    tracing::info!(
        "Connected to MPD {}",
        greeting.version().unwrap_or("(unknown version)")
    );
    Ok(client)
}

fn print_reply(reply: &Reply) {
    let Some(list) = reply.records() else {
        println!("OK");
        return;
    };
    for (i, record) in list.records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for (key, value) in record.iter() {
            println!("{}: {}", key, value);
        }
    }
    for line in &list.lines {
        println!("{}", line);
    }
}
