use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nyxta_api::gallery::{self, GalleryFilter};
use nyxta_api::normalize::{normalize_branch, normalize_branches};
use nyxta_api::{ApiClient, ApiError};
use nyxta_core::{load_app_config, Branch, NewEnquiry};

#[derive(Debug, Parser)]
#[command(name = "nyxta-cli")]
#[command(about = "Nyxta hostel data layer command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every branch.
    Branches,
    /// Show one branch in detail.
    Branch { id: i64 },
    /// Show gallery images, optionally scoped to a branch and filtered.
    Gallery {
        /// Fetch only this branch's images instead of the full gallery.
        #[arg(long)]
        branch_id: Option<i64>,
        /// Exact branch label filter (e.g. "Branch 31"); "all" passes
        /// everything through.
        #[arg(long)]
        branch: Option<String>,
        /// Case-insensitive search over title, branch and description.
        #[arg(long)]
        search: Option<String>,
    },
    /// Submit a booking/contact enquiry.
    Enquire {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        branch_id: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = ApiClient::new(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Branches => list_branches(&client).await,
        Commands::Branch { id } => show_branch(&client, id).await,
        Commands::Gallery {
            branch_id,
            branch,
            search,
        } => show_gallery(&client, branch_id, branch, search).await,
        Commands::Enquire {
            name,
            phone,
            email,
            message,
            branch_id,
        } => submit_enquiry(&client, name, phone, email, message, branch_id).await,
    }
}

async fn list_branches(client: &ApiClient) -> anyhow::Result<()> {
    let raws = client.get_branches().await?;
    let mut branches = normalize_branches(&raws);
    // Listing order follows the backend's display_order when set.
    branches.sort_by_key(|b| b.display_order.unwrap_or(i64::MAX));

    for branch in &branches {
        let tag = if branch.ladies { "ladies" } else { "mens" };
        println!(
            "#{:<4} Branch {:<4} {:<16} [{}] {}",
            branch.id, branch.branch_number, branch.place, tag, branch.phone
        );
    }
    Ok(())
}

async fn show_branch(client: &ApiClient, id: i64) -> anyhow::Result<()> {
    let raw = match client.get_branch(id).await {
        Ok(raw) => raw,
        // A missing branch is its own state, not an error banner: offer
        // the way back to the listing.
        Err(ApiError::NotFound { .. }) => {
            println!("Branch {id} not found. Run `nyxta-cli branches` for the current list.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    print_branch(&normalize_branch(&raw));
    Ok(())
}

fn print_branch(branch: &Branch) {
    println!("{} (Branch {})", branch.name, branch.branch_number);
    println!("  place:    {}", branch.place);
    if !branch.phone.is_empty() {
        println!("  phone:    {}", branch.phone);
    }
    if !branch.address.is_empty() {
        println!("  address:  {}", branch.address);
    }
    if !branch.location.is_empty() {
        println!("  map:      {}", branch.location);
    }

    if !branch.rooms_price.is_empty() {
        // Highest rate first is a render-time choice, not a data guarantee.
        let mut rooms = branch.rooms_price.clone();
        rooms.sort_by(|a, b| b.rate_per_month.cmp(&a.rate_per_month));
        println!("  rooms:");
        for room in &rooms {
            println!("    {}: Rs {}/month", room.title, room.rate_per_month);
        }
    }

    if !branch.location_perks.is_empty() {
        println!("  nearby:");
        for perk in &branch.location_perks {
            println!(
                "    {} ({}, {})",
                perk.title, perk.distance, perk.time_to_reach
            );
        }
    }

    match &branch.amenities {
        Some(amenities) if !amenities.is_empty() => {
            println!("  amenities: {}", amenities.join(", "));
        }
        Some(_) => println!("  amenities: none"),
        None => {}
    }

    match branch.cooking_fee {
        Some(0) => println!("  cooking:  free"),
        Some(fee) => println!("  cooking:  Rs {fee}/month"),
        None => {}
    }
    if branch.reg_fee > 0 {
        println!("  reg fee:  Rs {}", branch.reg_fee);
    }
    if branch.mess_available {
        println!("  mess:     available");
    }
}

async fn show_gallery(
    client: &ApiClient,
    branch_id: Option<i64>,
    branch: Option<String>,
    search: Option<String>,
) -> anyhow::Result<()> {
    let raws = client.get_branches().await?;
    let branches = normalize_branches(&raws);

    let images = match branch_id {
        Some(id) => gallery::fetch_gallery_for_branch(client, id, &branches).await?,
        None => gallery::fetch_gallery(client, &branches).await?,
    };
    if images.is_empty() {
        println!("No images for this selection.");
        return Ok(());
    }

    let filter = GalleryFilter {
        branch,
        search_term: search,
    };
    let filtered = gallery::filter_images(&images, &filter);
    if filtered.is_empty() {
        println!(
            "No images match the current filters ({} available). Try adjusting them.",
            images.len()
        );
        return Ok(());
    }

    println!("Showing {} of {} images", filtered.len(), images.len());
    for image in &filtered {
        let title = if image.title.is_empty() {
            "(untitled)"
        } else {
            &image.title
        };
        println!("  [{}] {} {}", image.branch, title, image.src);
    }
    Ok(())
}

async fn submit_enquiry(
    client: &ApiClient,
    name: String,
    phone: String,
    email: Option<String>,
    message: Option<String>,
    branch_id: Option<i64>,
) -> anyhow::Result<()> {
    let mut enquiry = NewEnquiry::new(name, phone);
    enquiry.email = email;
    enquiry.message = message;
    enquiry.branch_id = branch_id;

    let created = client.create_enquiry(&enquiry).await?;
    println!(
        "Enquiry #{} received. We'll reach out on {}.",
        created.id, created.phone
    );
    Ok(())
}
