use apibump_cli::UserCancelled;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = apibump_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        // A cancelled prompt just stops the run
        if e.downcast_ref::<UserCancelled>().is_some() {
            return;
        }
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
