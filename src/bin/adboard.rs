use adboard::{Board, BoardClient, RecordsApi, analysis, render};

const USAGE: &str = "usage: adboard [--url URL] <command> [options]
commands:
  list                                       show all records as a table
  add --date DATE --cost COST --leads N --messages N
                                             submit one record and reload
  import FILE.csv                            submit every row of a CSV file
  trends                                     day-over-day spend analysis
URL defaults to http://127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let mut url = "http://127.0.0.1:8080".to_string();
    let mut command: Option<String> = None;
    let mut rest: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => {
                url = args.next().ok_or("missing value for --url")?;
            }
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                return Ok(());
            }
            _ if command.is_none() => command = Some(arg),
            _ => rest.push(arg),
        }
    }

    let client = BoardClient::new(url);
    match command.as_deref() {
        Some("list") => list(&client).await,
        Some("add") => add(client, &rest).await,
        #[cfg(feature = "import-csv")]
        Some("import") => import(&client, &rest).await,
        Some("trends") => trends(&client).await,
        _ => {
            eprintln!("{USAGE}");
            Err("missing or unknown command".into())
        }
    }
}

async fn list(client: &BoardClient) -> Result<(), Box<dyn std::error::Error>> {
    let records = client.list().await?;
    print!("{}", render::table(&records));
    Ok(())
}

async fn add(client: BoardClient, rest: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new(client);
    let form = board.form_mut();

    let mut args = rest.iter();
    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "--date" => &mut form.date,
            "--cost" => &mut form.cost,
            "--leads" => &mut form.lead_count,
            "--messages" => &mut form.message_count,
            other => return Err(format!("unknown option for add: {other}").into()),
        };
        *slot = args
            .next()
            .cloned()
            .ok_or_else(|| format!("missing value for {arg}"))?;
    }

    let notices = board.submit().await;
    for notice in &notices {
        println!("{notice}");
    }
    if notices.iter().any(adboard::Notice::is_failure) {
        return Err("add did not complete".into());
    }
    print!("{}", render::table(board.rows()));
    Ok(())
}

#[cfg(feature = "import-csv")]
async fn import(client: &BoardClient, rest: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let path = rest.first().ok_or("usage: adboard import FILE.csv")?;
    let records = adboard::import::read_records(path)?;

    for record in &records {
        client.create(record).await?;
    }
    println!("imported {} records", records.len());
    Ok(())
}

async fn trends(client: &BoardClient) -> Result<(), Box<dyn std::error::Error>> {
    let records = client.list().await?;
    let report = analysis::trend_report(&records);
    if report.is_empty() {
        println!("need at least two records to analyze trends");
        return Ok(());
    }
    for point in report {
        println!("{point}");
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
