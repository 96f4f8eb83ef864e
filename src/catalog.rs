use crate::models::{Booking, BookingStatus, GeoPoint, Listing, Location, Pricing, User};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

/// Where new listings are pinned until the owner sets a position
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint {
    lat: 50.0755,
    lng: 14.4378,
};

pub const DEFAULT_ADDRESS: &str = "Praha, Česká republika";

/// The signed-in user of the session
pub fn mock_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "Jakub Novák".to_string(),
        email: "jakub@sdilejto.cz".to_string(),
        is_verified: true,
        avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80&w=200&h=200&auto=format&fit=crop".to_string(),
    }
}

struct Seed {
    id: &'static str,
    owner_id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    daily: u64,
    deposit: u64,
    lat: f64,
    lng: f64,
    address: &'static str,
    image: &'static str,
    available_in_days: &'static [i64],
    created_days_ago: i64,
}

const SEEDS: [Seed; 12] = [
    Seed {
        id: "l-1",
        owner_id: "user-2",
        title: "Profesionální sada vrtaček",
        description: "Vrtačka DeWalt 20V Max XR, obsahuje 2 baterie a nabíječku. Ideální pro domácí rekonstrukce.",
        category: "tools",
        daily: 300,
        deposit: 2000,
        lat: 50.0755,
        lng: 14.4378,
        address: "Praha 1, Můstek",
        image: "https://images.unsplash.com/photo-1581147036324-c17ac41dfa6c?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[1, 2],
        created_days_ago: 10,
    },
    Seed {
        id: "l-2",
        owner_id: "user-1",
        title: "Dron DJI Mini 3 Pro",
        description: "Extrémně lehký a skládací dron s 4K/60fps videem. Dodáváno se 3 bateriemi a ND filtry.",
        category: "electronics",
        daily: 800,
        deposit: 10000,
        lat: 50.1018,
        lng: 14.4502,
        address: "Praha 7, Holešovice",
        image: "https://images.unsplash.com/photo-1507582020474-9a35b7d455d9?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[0],
        created_days_ago: 2,
    },
    Seed {
        id: "l-3",
        owner_id: "user-3",
        title: "JBL PartyBox 310",
        description: "Výkonný přenosný párty reproduktor se světelnými efekty a hlubokými basy. Skvělé pro oslavy.",
        category: "party",
        daily: 600,
        deposit: 5000,
        lat: 50.0521,
        lng: 14.4308,
        address: "Praha 4, Pankrác",
        image: "https://images.unsplash.com/photo-1545454675-3531b543be5d?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[5],
        created_days_ago: 15,
    },
    Seed {
        id: "l-4",
        owner_id: "user-4",
        title: "Horský stan pro 3 osoby",
        description: "Husky Fighter 3-4. Stan z řady extreme, ideální do vysokohorského terénu a sněhu.",
        category: "outdoor",
        daily: 250,
        deposit: 2500,
        lat: 50.1118,
        lng: 14.4902,
        address: "Praha 9, Vysočany",
        image: "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[1],
        created_days_ago: 1,
    },
    Seed {
        id: "l-5",
        owner_id: "user-5",
        title: "Sekačka Bosch Rotak 32",
        description: "Kompaktní a výkonná elektrická sekačka pro malé a střední zahrady.",
        category: "garden",
        daily: 350,
        deposit: 1500,
        lat: 50.1015,
        lng: 14.3562,
        address: "Praha 6, Dejvice",
        image: "https://images.unsplash.com/photo-1592419044706-39796d40f98c?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[2],
        created_days_ago: 30,
    },
    Seed {
        id: "l-6",
        owner_id: "user-2",
        title: "Kávovar DeLonghi Espresso",
        description: "Pákový kávovar. Připraví kávu jako v kavárně přímo u vás doma.",
        category: "electronics",
        daily: 400,
        deposit: 4000,
        lat: 50.0763,
        lng: 14.4182,
        address: "Praha 2, Vinohrady",
        image: "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[0],
        created_days_ago: 5,
    },
    Seed {
        id: "l-7",
        owner_id: "user-6",
        title: "Nafukovací paddleboard set",
        description: "Kompletní SUP set: board, pádlo, pumpa a přepravní vak.",
        category: "outdoor",
        daily: 500,
        deposit: 3000,
        lat: 50.0384,
        lng: 14.4057,
        address: "Praha 5, Smíchov",
        image: "https://images.unsplash.com/photo-1520116468816-95b69f847357?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[10],
        created_days_ago: 3,
    },
    Seed {
        id: "l-8",
        owner_id: "user-7",
        title: "Okružní pila Makita",
        description: "Vysoce výkonná kotoučová pila s 190mm kotoučem.",
        category: "tools",
        daily: 250,
        deposit: 2500,
        lat: 50.1264,
        lng: 14.4719,
        address: "Praha 8, Kobylisy",
        image: "https://images.unsplash.com/photo-1502444330042-d1a1ddf9bb5b?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[1],
        created_days_ago: 20,
    },
    Seed {
        id: "l-9",
        owner_id: "user-8",
        title: "Projektor Epson 4K",
        description: "Domácí kino projektor s 4K rozlišením.",
        category: "electronics",
        daily: 700,
        deposit: 8000,
        lat: 50.0632,
        lng: 14.5204,
        address: "Praha 10, Strašnice",
        image: "https://images.unsplash.com/photo-1517604931442-7e0c8ed2963c?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[0],
        created_days_ago: 8,
    },
    Seed {
        id: "l-10",
        owner_id: "user-4",
        title: "Snowboard Nitro Prime 155",
        description: "All-mountain snowboard včetně vázání. Velikost 155cm.",
        category: "outdoor",
        daily: 450,
        deposit: 4000,
        lat: 50.12,
        lng: 14.5,
        address: "Praha 9, Prosek",
        image: "https://images.unsplash.com/photo-1520627977056-c307aeb9a625?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[2],
        created_days_ago: 4,
    },
    Seed {
        id: "l-11",
        owner_id: "user-3",
        title: "Elektrická kytara Fender Strat",
        description: "Krásná kytara Fender Stratocaster. Součástí je malé 15W kombo.",
        category: "electronics",
        daily: 350,
        deposit: 6000,
        lat: 50.08,
        lng: 14.42,
        address: "Praha 1, Staré Město",
        image: "https://images.unsplash.com/photo-1550291652-6ea9114a47b1?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[7],
        created_days_ago: 25,
    },
    Seed {
        id: "l-12",
        owner_id: "user-5",
        title: "Vysokotlaký čistič Karcher",
        description: "Karcher K4 Full Control. Skvělý na mytí aut a teras.",
        category: "garden",
        daily: 400,
        deposit: 2000,
        lat: 50.06,
        lng: 14.38,
        address: "Praha 5, Košíře",
        image: "https://images.unsplash.com/photo-1592365559101-19adfefdf294?q=80&w=1000&auto=format&fit=crop",
        available_in_days: &[3],
        created_days_ago: 12,
    },
];

/// The session's listing catalogue. Dates are relative to `now`.
pub fn mock_listings(now: DateTime<Utc>) -> Vec<Listing> {
    let today: NaiveDate = now.date_naive();

    let listings: Vec<Listing> = SEEDS
        .iter()
        .map(|seed| Listing {
            id: seed.id.to_string(),
            owner_id: seed.owner_id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            pricing: Pricing::daily(seed.daily),
            deposit: seed.deposit,
            location: Location {
                lat: seed.lat,
                lng: seed.lng,
                address: seed.address.to_string(),
            },
            images: vec![seed.image.to_string()],
            manual: None,
            availability: seed
                .available_in_days
                .iter()
                .map(|days| today + Duration::days(*days))
                .collect(),
            created_at: now - Duration::days(seed.created_days_ago),
        })
        .collect();

    debug!("Loaded {} mock listings", listings.len());
    listings
}

pub fn find_listing<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|l| l.id == id)
}

/// A dashboard entry: a booking plus what the borrower sees next to it
#[derive(Debug, Clone)]
pub struct DashboardEntry {
    pub booking: Booking,
    pub item: String,
    pub dates: String,
    pub owner: String,
}

/// Simulated bookings of the signed-in user
pub fn sample_bookings() -> Vec<DashboardEntry> {
    vec![
        DashboardEntry {
            booking: Booking {
                id: "b-1".to_string(),
                listing_id: "l-2".to_string(),
                borrower_id: "user-1".to_string(),
                start_date: "24. říj".to_string(),
                end_date: "26. říj".to_string(),
                total_price: 800,
                deposit: 10000,
                status: BookingStatus::Active,
                handover_photos: None,
                return_photos: None,
            },
            item: "Dron DJI Mini 3 Pro".to_string(),
            dates: "24. říj - 26. říj".to_string(),
            owner: "Karel Svoboda".to_string(),
        },
        DashboardEntry {
            booking: Booking {
                id: "b-2".to_string(),
                listing_id: "l-12".to_string(),
                borrower_id: "user-1".to_string(),
                start_date: "28. říj".to_string(),
                end_date: "28. říj".to_string(),
                total_price: 450,
                deposit: 2000,
                status: BookingStatus::HandoverIn,
                handover_photos: None,
                return_photos: None,
            },
            item: "Tlaková myčka".to_string(),
            dates: "28. říj".to_string(),
            owner: "Marek Tichý".to_string(),
        },
    ]
}
