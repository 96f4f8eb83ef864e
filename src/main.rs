use anyhow::{Context, Result};
use base64::Engine;
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use sdilejto::assist::GeminiClient;
use sdilejto::booking::{BookingWizard, PAYMENT_DELAY};
use sdilejto::catalog::{find_listing, mock_listings, mock_user, sample_bookings};
use sdilejto::config::Config;
use sdilejto::listing_draft::{ListingDraft, PricingType};
use sdilejto::models::{GeoPoint, Listing, ManualKind};
use sdilejto::query::{ListingQuery, SortConfig, SortKey, PAGE_SIZE};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdilejto", version, about = "Sdílej to: půjčovna věcí od sousedů")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search, filter and sort listings
    Browse {
        /// Text searched in titles
        #[arg(long, default_value = "")]
        search: String,
        /// Category tag (tools, electronics, outdoor, party, garden)
        #[arg(long)]
        category: Option<String>,
        /// price, createdAt, category, availability or any listing field
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Your position as LAT,LNG; enables the distance filter
        #[arg(long, value_parser = parse_point)]
        near: Option<GeoPoint>,
        /// Maximum distance in km
        #[arg(long, default_value_t = 50.0, value_parser = parse_radius)]
        radius: f64,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one listing
    Show { id: String },
    /// Book a listing
    Book {
        id: String,
        /// First day (daily listings)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day (daily listings)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Day of the rental (hourly listings)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_clock)]
        start: Option<NaiveTime>,
        #[arg(long, value_parser = parse_clock)]
        end: Option<NaiveTime>,
        /// Agree to the rental terms
        #[arg(long)]
        accept_terms: bool,
    },
    /// Create a new listing
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "tools")]
        category: String,
        #[arg(long)]
        description: Option<String>,
        /// Price per hour instead of per day
        #[arg(long)]
        hourly: bool,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long)]
        deposit: Option<u64>,
        #[arg(long)]
        address: Option<String>,
        /// Available from; without --from/--to the item is always available
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long, value_enum, default_value_t = ManualArg::None)]
        manual: ManualArg,
        #[arg(long, default_value = "")]
        manual_data: String,
        /// Let the assistant write description, deposit and price
        #[arg(long)]
        ai_assist: bool,
        /// Let the assistant generate a product photo
        #[arg(long)]
        ai_image: bool,
        /// Where to save the generated photo
        #[arg(long, requires = "ai_image")]
        image_out: Option<String>,
    },
    /// Show the signed-in user
    Profile {
        /// Run the identity check
        #[arg(long)]
        verify: bool,
    },
    /// Bookings of the signed-in user
    Dashboard,
}

#[derive(Clone, Copy, ValueEnum)]
enum ManualArg {
    None,
    Link,
    Pdf,
    Text,
}

impl ManualArg {
    fn kind(self) -> Option<ManualKind> {
        match self {
            ManualArg::None => None,
            ManualArg::Link => Some(ManualKind::Link),
            ManualArg::Pdf => Some(ManualKind::Pdf),
            ManualArg::Text => Some(ManualKind::Text),
        }
    }
}

fn parse_point(raw: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{raw}'"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {e}"))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("bad longitude: {e}"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(format!("coordinates out of range: {lat},{lng}"));
    }
    Ok(GeoPoint::new(lat, lng))
}

fn parse_radius(raw: &str) -> Result<f64, String> {
    let km: f64 = raw.trim().parse().map_err(|e| format!("bad radius: {e}"))?;
    if !km.is_finite() {
        return Err(format!("radius must be a finite number of km, got '{raw}'"));
    }
    Ok(km)
}

fn parse_clock(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

fn print_listing(index: usize, listing: &Listing) {
    let category = listing.category_display();
    println!(
        "{}. {} ({} CZK/{}) [{}]",
        index,
        listing.title,
        listing.pricing.headline(),
        listing.pricing.unit_label(),
        category.label
    );
    println!("   {}", listing.location.address);
    match listing.earliest_availability() {
        Some(date) => println!("   Dostupné od: {}", date),
        None => println!("   Dostupné: kdykoliv"),
    }
    println!("   ID: {}", listing.id);
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let now = Utc::now();
    let listings = mock_listings(now);

    match cli.command {
        Command::Browse {
            search,
            category,
            sort,
            desc,
            near,
            radius,
            page,
            json,
        } => {
            let mut query = ListingQuery::new();
            query.set_search(search);
            query.set_category(category);
            if let Some(key) = sort {
                query.set_sort(Some(if desc { SortConfig::desc(key) } else { SortConfig::asc(key) }));
            }
            query.set_max_distance(radius);
            if let Some(point) = near {
                if let Err(notice) = query.apply_location_fix(Ok(point)) {
                    warn!("{}", notice);
                }
            }

            let total_pages = query.page(&listings).total_pages;
            query.set_page(page, total_pages);
            let view = query.page(&listings);

            if json {
                println!("{}", serde_json::to_string_pretty(&view.items)?);
                return Ok(());
            }

            info!("Showing page {}/{} of {} listings", view.page, view.total_pages.max(1), view.total_matches);
            if view.items.is_empty() {
                println!("Nebyly nalezeny žádné výsledky.");
            }
            let offset = (view.page - 1) * PAGE_SIZE;
            for (i, listing) in view.items.iter().enumerate() {
                print_listing(offset + i + 1, listing);
            }
        }

        Command::Show { id } => {
            let listing = find_listing(&listings, &id).with_context(|| format!("Listing {id} not found"))?;
            print_listing(1, listing);
            println!("{}", listing.description);
            println!("Kauce: {} CZK", listing.deposit);
            if let Some(rate) = listing.pricing.hourly {
                println!("Hodinová sazba: {} CZK", rate);
            }
            if let Some(rate) = listing.pricing.daily {
                println!("Denní sazba: {} CZK", rate);
            }
            if let Some(rate) = listing.pricing.monthly {
                println!("Měsíční sazba: {} CZK", rate);
            }
        }

        Command::Book {
            id,
            from,
            to,
            date,
            start,
            end,
            accept_terms,
        } => {
            let listing = find_listing(&listings, &id).with_context(|| format!("Listing {id} not found"))?;
            let mut wizard = BookingWizard::new(listing, now.date_naive());

            if wizard.is_hourly() {
                if let Some(date) = date.or(from) {
                    wizard.set_start_date(date);
                }
                if let Some(start) = start {
                    wizard.set_start_time(start);
                }
                if let Some(end) = end {
                    wizard.set_end_time(end);
                }
            } else {
                if let Some(from) = from.or(date) {
                    wizard.set_start_date(from);
                }
                if let Some(to) = to {
                    wizard.set_end_date(to);
                }
            }

            let quote = wizard.quote();
            println!("Nájem: {} CZK, kauce: {} CZK, celkem: {} CZK", quote.rent, quote.deposit, quote.total);

            wizard.review_terms()?;
            wizard.accept_terms(accept_terms);
            wizard.proceed_to_payment()?;

            let request = wizard.pay(PAYMENT_DELAY).await?;
            info!("Booking for {} requested", request.listing_id);

            let booking = request.into_booking(format!("b-{}", now.timestamp_millis()), mock_user().id);
            println!("{}", serde_json::to_string_pretty(&booking)?);
        }

        Command::Create {
            title,
            category,
            description,
            hourly,
            price,
            deposit,
            address,
            from,
            to,
            manual,
            manual_data,
            ai_assist,
            ai_image,
            image_out,
        } => {
            let mut draft = ListingDraft::new(now.date_naive());
            draft.title = title;
            draft.category = category;
            if let Some(description) = description {
                draft.description = description;
            }
            if hourly {
                draft.pricing_type = PricingType::Hourly;
            }
            if let Some(address) = address {
                draft.address = address;
            }
            if from.is_some() || to.is_some() {
                draft.always_available = false;
                draft.available_from = from.or(draft.available_from);
                draft.available_to = to;
            }
            draft.manual_kind = manual.kind();
            draft.manual_data = manual_data;

            if ai_assist || ai_image {
                let assistant = GeminiClient::new(&Config::from_env())?;

                if ai_assist && !draft.request_ai_help(&assistant).await? {
                    println!("AI se nepodařilo navrhnout inzerát. Vyplňte údaje ručně.");
                }

                if ai_image {
                    match draft.generate_image(&assistant).await {
                        Ok(()) => {
                            if let (Some(path), Some(image)) = (&image_out, draft.images.first()) {
                                save_data_url(image, path).await?;
                                info!("💾 Saved generated photo to {}", path);
                            }
                        }
                        Err(notice) => println!("{}", notice),
                    }
                }
            }

            // Explicit flags override what the assistant proposed
            if price.is_some() {
                draft.price = price;
            }
            if deposit.is_some() {
                draft.deposit = deposit;
            }

            let id = format!("l-{}", listings.len() + 1);
            let listing = draft.submit(id, mock_user().id, now)?;
            println!("Inzerát byl úspěšně publikován!");
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }

        Command::Profile { verify } => {
            let mut user = mock_user();
            if verify {
                if user.verify() {
                    println!("Identita byla úspěšně ověřena přes BankID!");
                } else {
                    println!("Identita už je ověřena.");
                }
            }
            println!("{} <{}>", user.name, user.email);
            println!("Ověřený účet: {}", if user.is_verified { "ano" } else { "ne" });
        }

        Command::Dashboard => {
            for entry in sample_bookings() {
                println!("{} ({})", entry.item, entry.booking.status.label());
                println!("   {} · {} CZK · majitel {}", entry.dates, entry.booking.total_price, entry.owner);
                println!();
            }
        }
    }

    Ok(())
}

/// Writes the payload of a `data:<mime>;base64,<data>` URL to `path`
async fn save_data_url(data_url: &str, path: &str) -> Result<()> {
    let (_, encoded) = data_url
        .split_once(";base64,")
        .context("Image is not a base64 data URL")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .context("Failed to decode image payload")?;
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("Failed to write {path}"))?;
    Ok(())
}
