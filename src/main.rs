use cinema_tickets::application::service::TicketService;
use cinema_tickets::domain::ports::{PaymentServiceBox, SeatReservationServiceBox};
use cinema_tickets::infrastructure::in_memory::{InMemoryPaymentGateway, InMemorySeatAllocator};
use cinema_tickets::interfaces::csv::confirmation_writer::ConfirmationWriter;
use cinema_tickets::interfaces::csv::purchase_reader::PurchaseReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input purchases CSV file (account,adult,child,infant)
    input: PathBuf,

    /// Opening balance given to each account. If omitted, the in-memory
    /// gateway accepts every payment.
    #[arg(long)]
    balance: Option<Decimal>,

    /// Print confirmations as JSON lines instead of CSV
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let gateway = InMemoryPaymentGateway::new();
    let payment: PaymentServiceBox = Box::new(gateway.clone());
    let reservation: SeatReservationServiceBox = Box::new(InMemorySeatAllocator::new());
    let service = TicketService::new(payment, reservation);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PurchaseReader::new(file);

    let stdout = io::stdout();
    let mut writer = if cli.json {
        None
    } else {
        Some(ConfirmationWriter::new(stdout.lock()))
    };

    for request_result in reader.requests() {
        let request = match request_result {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error reading purchase: {}", e);
                continue;
            }
        };

        // Each account gets its opening balance the first time it appears.
        if let Some(balance) = cli.balance
            && gateway.balance(request.account).await.is_none()
        {
            gateway.seed_account(request.account, balance).await;
        }

        match service.purchase_tickets(&request).await {
            Ok(confirmation) => {
                if let Some(writer) = writer.as_mut() {
                    writer.write(&confirmation).into_diagnostic()?;
                } else {
                    let line = serde_json::to_string(&confirmation).into_diagnostic()?;
                    println!("{}", line);
                }
            }
            Err(e) => {
                eprintln!("Error processing purchase: {}", e);
            }
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush().into_diagnostic()?;
    }

    Ok(())
}
