use crate::catalog::Catalog;
use crate::config::Config;
use crate::domain::agent::SocialLinks;
use crate::domain::property::{AreaUnit, Location, PropertyStatus, RentPeriod};
use crate::domain::{Agency, Agent, PriceType, Property, PropertyType};
use crate::router::AppState;
use astra::{Body, Request, Response};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http::Method;
use std::io::Read;
use std::sync::Arc;

/// Fixed "now" so relative timestamps never depend on the clock.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn agency(id: &str, name: &str) -> Agency {
    Agency {
        id: id.to_string(),
        name: name.to_string(),
        slug: crate::domain::format::slugify(name),
        logo: String::new(),
        cover_image: None,
        description: String::new(),
        address: "Dubai".to_string(),
        phone: "+971 4 000 0000".to_string(),
        email: "hello@agency.test".to_string(),
        website: None,
        agents_count: 1,
        properties_count: 0,
        rating: 4.5,
        reviews_count: 0,
        verified: true,
        premium: false,
        established: 2010,
    }
}

pub fn agent(id: &str, name: &str) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        slug: crate::domain::format::slugify(name),
        email: format!("{id}@atog.test"),
        phone: "+971 50 000 0000".to_string(),
        whatsapp: None,
        avatar: String::new(),
        agency: None,
        bio: String::new(),
        languages: vec!["English".to_string()],
        specializations: Vec::new(),
        properties_count: 0,
        rating: 4.0,
        reviews_count: 0,
        verified: false,
        super_agent: false,
        experience: 1,
        response_time: "Within 1 hour".to_string(),
        sold_properties: 0,
        active_listings: 0,
        social_links: SocialLinks::default(),
    }
}

pub fn property(id: &str) -> PropertyBuilder {
    PropertyBuilder::new(id)
}

/// A sale apartment in Downtown Dubai unless told otherwise.
pub struct PropertyBuilder {
    inner: Property,
}

impl PropertyBuilder {
    pub fn new(id: &str) -> Self {
        let created = base_time();
        Self {
            inner: Property {
                id: id.to_string(),
                title: format!("Listing {id}"),
                slug: format!("listing-{id}"),
                description: String::new(),
                price: 1_000_000,
                price_type: PriceType::Sale,
                rent_period: None,
                property_type: PropertyType::Apartment,
                status: PropertyStatus::Ready,
                bedrooms: 1,
                bathrooms: 1,
                area: 800.0,
                area_unit: AreaUnit::Sqft,
                location: Location {
                    city: "Dubai".to_string(),
                    area: "Downtown Dubai".to_string(),
                    building: None,
                    address: "Boulevard".to_string(),
                    coordinates: None,
                },
                images: Vec::new(),
                features: Vec::new(),
                amenities: Vec::new(),
                agent: agent("agent-test", "Test Agent"),
                developer: None,
                verified: false,
                featured: false,
                premium: false,
                view_count: 0,
                created_at: created,
                updated_at: created,
            },
        }
    }

    pub fn price(mut self, price: u64) -> Self {
        self.inner.price = price;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.inner.title = title.to_string();
        self
    }

    pub fn bedrooms(mut self, n: u32) -> Self {
        self.inner.bedrooms = n;
        self
    }

    pub fn rent(mut self) -> Self {
        self.inner.price_type = PriceType::Rent;
        self.inner.rent_period = Some(RentPeriod::Yearly);
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.inner.status = status;
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.inner.created_at = base_time() - Duration::days(days);
        self
    }

    pub fn views(mut self, n: u64) -> Self {
        self.inner.view_count = n;
        self
    }

    pub fn villa(mut self) -> Self {
        self.inner.property_type = PropertyType::Villa;
        self
    }

    /// Location area (neighbourhood), not floor area.
    pub fn area(mut self, area: &str) -> Self {
        self.inner.location.area = area.to_string();
        self
    }

    pub fn featured(mut self) -> Self {
        self.inner.featured = true;
        self
    }

    pub fn build(self) -> Property {
        self.inner
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// urlencoded form POST.
pub fn post_form(uri: &str, form: &str) -> Request {
    let mut req = Request::new(Body::from(form.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

/// Embedded catalog with default config.
pub fn test_state() -> AppState {
    AppState {
        catalog: Arc::new(Catalog::load().expect("embedded fixtures must load")),
        config: Config::default(),
    }
}
