//! Command-line client for the Base11 API.
//!
//! DESIGN
//! ======
//! Every create command builds the same `schema` payload the web forms build
//! and validates it locally first, so the CLI rejects exactly what the
//! browser rejects. `show` performs the dashboard's joins after fetching all
//! five lists concurrently.


use std::fmt::Write as _;

use clap::{Args, Parser, Subcommand};
use schema::endpoint::{DEFAULT_API_BASE_URL, join_url};
use schema::{
    Company, CompanyDetail, Industry, ListKey, ListPayload, Location, LoginRequest, Metric, MetricSnapshot, MetricType,
    NewCompany, NewIndustry, NewLocation, NewMetricSnapshot, Payload, Permission, RegisterRequest, SnapshotInput,
    ValidationErrors, find_by_id,
};

const AUTHORIZATION_HEADER: &str = "authorization";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set BASE11_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid input:\n{}", render_validation(.0))]
    Invalid(ValidationErrors),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("no metric with id `{0}`")]
    UnknownMetric(String),
    #[error("no company with id `{0}`")]
    UnknownCompany(String),
}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

#[derive(Parser, Debug)]
#[command(name = "base11-cli", about = "Base11 companies API CLI")]
struct Cli {
    #[arg(long, env = "BASE11_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    #[arg(long, env = "BASE11_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register and print the session token.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        /// ADMIN, READ or WRITE.
        #[arg(long)]
        permissions: Permission,
    },
    Companies(CompanyCommand),
    Industries(IndustryCommand),
    Locations(LocationCommand),
    Metrics(MetricCommand),
    Snapshots(SnapshotCommand),
    /// Print one company joined with its industry, location and snapshots.
    Show { company_id: String },
}

#[derive(Args, Debug)]
struct CompanyCommand {
    #[command(subcommand)]
    command: CompanySubcommand,
}

#[derive(Subcommand, Debug)]
enum CompanySubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        website: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        logo: String,
        #[arg(long)]
        industry_id: Option<String>,
        #[arg(long)]
        location_id: Option<String>,
    },
}

#[derive(Args, Debug)]
struct IndustryCommand {
    #[command(subcommand)]
    command: IndustrySubcommand,
}

#[derive(Subcommand, Debug)]
enum IndustrySubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
    },
}

#[derive(Args, Debug)]
struct LocationCommand {
    #[command(subcommand)]
    command: LocationSubcommand,
}

#[derive(Subcommand, Debug)]
enum LocationSubcommand {
    List,
    Create {
        /// City name.
        #[arg(long)]
        name: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        pincode: String,
    },
}

#[derive(Args, Debug)]
struct MetricCommand {
    #[command(subcommand)]
    command: MetricSubcommand,
}

#[derive(Subcommand, Debug)]
enum MetricSubcommand {
    List,
}

#[derive(Args, Debug)]
struct SnapshotCommand {
    #[command(subcommand)]
    command: SnapshotSubcommand,
}

#[derive(Subcommand, Debug)]
enum SnapshotSubcommand {
    List {
        #[arg(long)]
        company_id: Option<String>,
    },
    Create {
        #[arg(long)]
        company_id: String,
        #[arg(long)]
        metric_id: String,
        /// Capture date, `YYYY-MM-DD`.
        #[arg(long)]
        captured_on: String,
        /// Reading, interpreted by the metric's type.
        #[arg(long)]
        value: String,
    },
}

#[derive(Debug, Clone)]
struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    fn new(base_url: String, token: Option<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url, token }
    }

    fn token(&self) -> Result<&str, CliError> {
        self.token.as_deref().filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)
    }

    async fn fetch_list(&self, key: ListKey) -> Result<ListPayload, CliError> {
        let response = self
            .http
            .get(join_url(&self.base_url, key.path()))
            .header(AUTHORIZATION_HEADER, self.token()?)
            .send()
            .await?;
        let body = read_success(response).await?;
        Ok(ListPayload::decode(key, &body)?)
    }

    async fn post<P: Payload>(&self, payload: &P) -> Result<P::Response, CliError> {
        payload.validate()?;
        let mut request = self.http.post(join_url(&self.base_url, P::ENDPOINT.path())).json(payload);
        if P::ENDPOINT.requires_token() {
            request = request.header(AUTHORIZATION_HEADER, self.token()?);
        }
        let body = read_success(request.send().await?).await?;
        Ok(P::decode_response(&body)?)
    }
}

async fn read_success(response: reqwest::Response) -> Result<String, CliError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let api = ApiClient::new(cli.api_url, cli.token);
    if let Err(e) = run(&api, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let token = api.post(&LoginRequest { email, password }).await?;
            println!("{}", token.token);
        }
        Command::Register { email, password, first_name, last_name, permissions } => {
            let request = RegisterRequest { email, password, first_name, last_name, permissions: Some(permissions) };
            let token = api.post(&request).await?;
            println!("{}", token.token);
        }
        Command::Companies(cmd) => match cmd.command {
            CompanySubcommand::List => {
                let companies: Vec<Company> = list(api, ListKey::Companies).await?;
                print!("{}", render_companies(&companies));
            }
            CompanySubcommand::Create { name, website, description, logo, industry_id, location_id } => {
                let payload = NewCompany::from_form(&name, &website, &description, &logo, industry_id, location_id);
                api.post(&payload).await?;
                println!("Company added successfully!");
            }
        },
        Command::Industries(cmd) => match cmd.command {
            IndustrySubcommand::List => {
                let industries: Vec<Industry> = list(api, ListKey::Industries).await?;
                print!("{}", render_named(industries.iter().map(|i| (i.id.as_str(), i.name.as_str()))));
            }
            IndustrySubcommand::Create { name } => {
                api.post(&NewIndustry { name }).await?;
                println!("Industry added successfully!");
            }
        },
        Command::Locations(cmd) => match cmd.command {
            LocationSubcommand::List => {
                let locations: Vec<Location> = list(api, ListKey::Locations).await?;
                print!("{}", render_locations(&locations));
            }
            LocationSubcommand::Create { name, state, country, pincode } => {
                api.post(&NewLocation { name, state, country, pincode }).await?;
                println!("Location added successfully!");
            }
        },
        Command::Metrics(cmd) => match cmd.command {
            MetricSubcommand::List => {
                let metrics: Vec<Metric> = list(api, ListKey::Metrics).await?;
                print!("{}", render_metrics(&metrics));
            }
        },
        Command::Snapshots(cmd) => match cmd.command {
            SnapshotSubcommand::List { company_id } => {
                let (metrics, snapshots) = tokio::try_join!(
                    list::<Metric>(api, ListKey::Metrics),
                    list::<MetricSnapshot>(api, ListKey::MetricSnapshots),
                )?;
                print!("{}", render_snapshots(&snapshots, &metrics, company_id.as_deref()));
            }
            SnapshotSubcommand::Create { company_id, metric_id, captured_on, value } => {
                let metrics: Vec<Metric> = list(api, ListKey::Metrics).await?;
                let kind = metric_kind(&metrics, &metric_id)?;
                let payload = NewMetricSnapshot::from_input(SnapshotInput {
                    company_id: &company_id,
                    metric: Some((metric_id.as_str(), kind)),
                    captured_on: &captured_on,
                    value: &value,
                })?;
                api.post(&payload).await?;
                println!("Metric Snapshot added successfully!");
            }
        },
        Command::Show { company_id } => {
            let (companies, industries, locations, metrics, snapshots) = tokio::try_join!(
                list::<Company>(api, ListKey::Companies),
                list::<Industry>(api, ListKey::Industries),
                list::<Location>(api, ListKey::Locations),
                list::<Metric>(api, ListKey::Metrics),
                list::<MetricSnapshot>(api, ListKey::MetricSnapshots),
            )?;
            let company =
                find_by_id(&companies, &company_id).ok_or_else(|| CliError::UnknownCompany(company_id.clone()))?;
            let detail = CompanyDetail::resolve(company, &industries, &locations, &metrics, &snapshots);
            print!("{}", render_detail(&detail));
        }
    }
    Ok(())
}

/// Typed view over one decoded list.
trait FromPayload: Sized {
    fn from_payload(payload: ListPayload) -> Option<Vec<Self>>;
}

macro_rules! impl_from_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl FromPayload for $ty {
            fn from_payload(payload: ListPayload) -> Option<Vec<Self>> {
                match payload {
                    ListPayload::$variant(items) => Some(items),
                    _ => None,
                }
            }
        })*
    };
}

impl_from_payload!(
    Company => Companies,
    Industry => Industries,
    Location => Locations,
    Metric => Metrics,
    MetricSnapshot => MetricSnapshots,
);

async fn list<T: FromPayload>(api: &ApiClient, key: ListKey) -> Result<Vec<T>, CliError> {
    let payload = api.fetch_list(key).await?;
    Ok(T::from_payload(payload).unwrap_or_default())
}

fn metric_kind(metrics: &[Metric], metric_id: &str) -> Result<MetricType, CliError> {
    find_by_id(metrics, metric_id)
        .map(|m| m.kind)
        .ok_or_else(|| CliError::UnknownMetric(metric_id.to_owned()))
}

fn render_validation(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|e| format!("  {}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_named<'a>(rows: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    for (id, name) in rows {
        let _ = writeln!(out, "{id}\t{name}");
    }
    out
}

fn render_companies(companies: &[Company]) -> String {
    let mut out = String::new();
    for c in companies {
        let _ = writeln!(out, "{}\t{}\t{}", c.id, c.name, c.website);
    }
    out
}

fn render_locations(locations: &[Location]) -> String {
    let mut out = String::new();
    for l in locations {
        let _ = writeln!(out, "{}\t{}, {}, {} {}", l.id, l.name, l.state, l.country, l.pincode);
    }
    out
}

fn render_metrics(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for m in metrics {
        let annualized = if m.annualized { "\tannualized" } else { "" };
        let _ = writeln!(out, "{}\t{}\t{}{annualized}", m.id, m.name, m.kind);
    }
    out
}

fn render_snapshots(snapshots: &[MetricSnapshot], metrics: &[Metric], company_id: Option<&str>) -> String {
    let mut out = String::new();
    for s in snapshots.iter().filter(|s| company_id.is_none_or(|id| s.company_id == id)) {
        let metric = find_by_id(metrics, &s.metric_id);
        let reading = s.reading(metric.map(|m| m.kind));
        let name = metric.map_or(s.metric_id.as_str(), |m| m.name.as_str());
        let _ = writeln!(out, "{}\t{}\t{}\t{reading}\t{}", s.id, s.company_id, name, s.captured_at.date_naive());
    }
    out
}

fn render_detail(detail: &CompanyDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", detail.company.name, detail.company.website);
    if let Some(description) = &detail.company.description {
        let _ = writeln!(out, "  {description}");
    }
    let _ = writeln!(out, "  Industry: {}", detail.industry_label());
    let _ = writeln!(out, "  Location: {}", detail.location_label());
    if detail.snapshots.is_empty() {
        let _ = writeln!(out, "  No metric snapshots.");
    } else {
        let _ = writeln!(out, "  Metrics:");
        for line in &detail.snapshots {
            let _ = writeln!(out, "    {}: {} ({})", line.metric_label(), line.reading, line.captured_on);
        }
    }
    out
}
