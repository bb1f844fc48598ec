// src/bin/seed.rs

use dotenv::dotenv;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::process;
use std::time::Duration;

// --- ANSI terminal colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// --- Seed runner ---

// Safe to re-run: existing destinations are resolved instead of recreated
// and hotels that already exist are skipped.
struct SeedRunner {
    base_url: String,
    client: Client,
    destinations_created: u32,
    destinations_skipped: u32,
    hotels_created: u32,
    hotels_skipped: u32,
}

impl SeedRunner {
    fn new(base_url: String) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            base_url,
            client,
            destinations_created: 0,
            destinations_skipped: 0,
            hotels_created: 0,
            hotels_skipped: 0,
        })
    }

    async fn check_service_health(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Find an existing destination id by exact name and country.
    async fn resolve_destination(
        &self,
        name: &str,
        country: &str,
    ) -> anyhow::Result<Option<String>> {
        let response = self
            .client
            .get(format!("{}/api/destinations", self.base_url))
            .query(&[("search", name), ("country", country)])
            .send()
            .await?;
        let body: Value = response.json().await?;

        let found = body["data"]
            .as_array()
            .and_then(|list| {
                list.iter().find(|entry| {
                    entry["name"]
                        .as_str()
                        .map(|n| n.eq_ignore_ascii_case(name))
                        .unwrap_or(false)
                })
            })
            .and_then(|entry| entry["id"].as_str())
            .map(str::to_string);
        Ok(found)
    }

    /// Create one destination, resolving the id of an already existing one
    /// on conflict.
    async fn seed_destination(&mut self, payload: &Value) -> anyhow::Result<String> {
        let name = payload["name"].as_str().unwrap_or_default();
        let country = payload["country"].as_str().unwrap_or_default();

        let response = self
            .client
            .post(format!("{}/api/destinations", self.base_url))
            .json(payload)
            .send()
            .await?;

        match response.status().as_u16() {
            201 => {
                let body: Value = response.json().await?;
                let id = body["data"]["id"]
                    .as_str()
                    .ok_or_else(|| anyhow::anyhow!("create response carried no id"))?
                    .to_string();
                self.destinations_created += 1;
                println!("{}  + destination {} ({}){}", GREEN, name, country, RESET);
                Ok(id)
            }
            409 => {
                let id = self
                    .resolve_destination(name, country)
                    .await?
                    .ok_or_else(|| {
                        anyhow::anyhow!("{} already exists but could not be resolved", name)
                    })?;
                self.destinations_skipped += 1;
                println!("{}  = destination {} already present{}", YELLOW, name, RESET);
                Ok(id)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("creating destination {} failed: HTTP {} - {}", name, status, body)
            }
        }
    }

    /// The server canonicalizes hotel names, so the probe compares
    /// case-insensitively.
    async fn hotel_exists(&self, name: &str, destination_id: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .get(format!("{}/api/hotels", self.base_url))
            .query(&[("destination", destination_id), ("search", name)])
            .send()
            .await?;
        let body: Value = response.json().await?;

        let exists = body["data"]
            .as_array()
            .map(|list| {
                list.iter().any(|entry| {
                    entry["name"]
                        .as_str()
                        .map(|n| n.eq_ignore_ascii_case(name))
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false);
        Ok(exists)
    }

    async fn seed_hotel(&mut self, mut payload: Value, destination_id: &str) -> anyhow::Result<()> {
        let name = payload["name"].as_str().unwrap_or_default().to_string();

        if self.hotel_exists(&name, destination_id).await? {
            self.hotels_skipped += 1;
            println!("{}  = hotel {} already present{}", YELLOW, name, RESET);
            return Ok(());
        }

        payload["destination"] = json!(destination_id);
        let response = self
            .client
            .post(format!("{}/api/hotels", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if response.status().as_u16() == 201 {
            self.hotels_created += 1;
            println!("{}  + hotel {}{}", GREEN, name, RESET);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("creating hotel {} failed: HTTP {} - {}", name, status, body)
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        println!("\n{}Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}Service unavailable at {}{}", RED, self.base_url, RESET);
            println!(
                "{}Please ensure travel-catalog-api is running (cargo run){}",
                YELLOW, RESET
            );
            process::exit(1);
        }
        println!("{}Service available{}\n", GREEN, RESET);

        println!("{}Seeding destinations...{}", BOLD, RESET);
        let mut destination_ids = Vec::new();
        for payload in sample_destinations() {
            let id = self.seed_destination(&payload).await?;
            destination_ids.push(id);
        }

        println!("\n{}Seeding hotels...{}", BOLD, RESET);
        for (destination_index, payload) in sample_hotels() {
            let destination_id = destination_ids[destination_index].clone();
            self.seed_hotel(payload, &destination_id).await?;
        }

        println!("\n{}Seed complete{}", GREEN, RESET);
        println!(
            "  destinations: {} created, {} skipped",
            self.destinations_created, self.destinations_skipped
        );
        println!(
            "  hotels:       {} created, {} skipped",
            self.hotels_created, self.hotels_skipped
        );
        Ok(())
    }
}

// --- Sample data ---

fn sample_destinations() -> Vec<Value> {
    vec![
        json!({
            "name": "Paris",
            "country": "France",
            "description": {
                "en": "The City of Light, known for its art, fashion, and iconic landmarks like the Eiffel Tower. A romantic city with world-class museums, charming cafes, and beautiful architecture.",
                "ar": "مدينة النور، معروفة بفنها وأزيائها ومعالمها الشهيرة مثل برج إيفل. مدينة رومانسية مع متاحف عالمية المستوى ومقاهي ساحرة وعمارة جميلة."
            },
            "coordinates": { "latitude": 48.8566, "longitude": 2.3522 },
            "climate": "Temperate",
            "bestTimeToVisit": "Spring (April-June) and Fall (September-November)",
            "imageUrl": "https://images.unsplash.com/photo-1502602898536-47ad22581b52?auto=format&fit=crop&w=1000&q=80"
        }),
        json!({
            "name": "Tokyo",
            "country": "Japan",
            "description": {
                "en": "A vibrant metropolis blending traditional culture with cutting-edge technology. Experience ancient temples, modern skyscrapers, and incredible cuisine.",
                "ar": "عاصمة نابضة بالحياة تجمع بين الثقافة التقليدية والتكنولوجيا المتطورة. اختبر المعابد القديمة وناطحات السحاب الحديثة والمأكولات المذهلة."
            },
            "coordinates": { "latitude": 35.6762, "longitude": 139.6503 },
            "climate": "Temperate",
            "bestTimeToVisit": "Spring (March-May) and Fall (September-November)",
            "imageUrl": "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?auto=format&fit=crop&w=1000&q=80"
        }),
        json!({
            "name": "Dubai",
            "country": "UAE",
            "description": {
                "en": "A modern city in the desert, famous for luxury shopping, ultramodern architecture, and vibrant nightlife. Home to the world's tallest building.",
                "ar": "مدينة حديثة في الصحراء، مشهورة بالتسوق الفاخر والهندسة المعمارية المتطورة والحياة الليلية النابضة بالحياة. موطن لأطول مبنى في العالم."
            },
            "coordinates": { "latitude": 25.2048, "longitude": 55.2708 },
            "climate": "Arid",
            "bestTimeToVisit": "Winter (November-March)",
            "imageUrl": "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?auto=format&fit=crop&w=1000&q=80"
        }),
        json!({
            "name": "New York",
            "country": "USA",
            "description": {
                "en": "The Big Apple, a city that never sleeps. Experience Broadway shows, world-class museums, Central Park, and the iconic Statue of Liberty.",
                "ar": "التفاحة الكبيرة، مدينة لا تنام أبداً. اختبر عروض برودواي والمتاحف عالمية المستوى وحديقة سنترال بارك وتمثال الحرية الشهير."
            },
            "coordinates": { "latitude": 40.7128, "longitude": -74.0060 },
            "climate": "Continental",
            "bestTimeToVisit": "Spring (April-June) and Fall (September-November)",
            "imageUrl": "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?auto=format&fit=crop&w=1000&q=80"
        }),
        json!({
            "name": "London",
            "country": "UK",
            "description": {
                "en": "The capital of England, rich in history and culture. Visit Buckingham Palace, the Tower of London, and enjoy traditional afternoon tea.",
                "ar": "عاصمة إنجلترا، غنية بالتاريخ والثقافة. زر قصر باكنغهام وبرج لندن واستمتع بشاي بعد الظهر التقليدي."
            },
            "coordinates": { "latitude": 51.5074, "longitude": -0.1278 },
            "climate": "Temperate",
            "bestTimeToVisit": "Summer (June-August) and Spring (March-May)",
            "imageUrl": "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad?auto=format&fit=crop&w=1000&q=80"
        }),
        json!({
            "name": "Sydney",
            "country": "Australia",
            "description": {
                "en": "Australia's largest city, famous for its harbor, Opera House, and beautiful beaches. A perfect blend of urban life and natural beauty.",
                "ar": "أكبر مدينة في أستراليا، مشهورة بمينائها ودار الأوبرا وشواطئها الجميلة. مزيج مثالي من الحياة الحضرية والجمال الطبيعي."
            },
            "coordinates": { "latitude": -33.8688, "longitude": 151.2093 },
            "climate": "Temperate",
            "bestTimeToVisit": "Spring (September-November) and Fall (March-May)",
            "imageUrl": "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=1000&q=80"
        }),
    ]
}

/// Hotel payloads paired with the index of their destination in
/// `sample_destinations`.
fn sample_hotels() -> Vec<(usize, Value)> {
    vec![
        (0, json!({
            "name": "Hotel Ritz Paris",
            "description": {
                "en": "Luxury hotel in the heart of Paris, offering elegant rooms and world-class service. Located near the Louvre and Place Vendôme.",
                "ar": "فندق فاخر في قلب باريس، يقدم غرف أنيقة وخدمة عالمية المستوى. يقع بالقرب من متحف اللوفر وساحة فاندوم."
            },
            "address": { "street": "15 Place Vendôme", "city": "Paris", "postalCode": "75001" },
            "coordinates": { "latitude": 48.8676, "longitude": 2.3301 },
            "contact": {
                "phone": "+33 1 43 16 30 30",
                "email": "reservations@ritzparis.com",
                "website": "https://www.ritzparis.com"
            },
            "amenities": ["WiFi", "Spa", "Restaurant", "Room Service", "Business Center", "Parking"],
            "starRating": 5,
            "priceRange": { "min": 800, "max": 2000, "currency": "EUR" },
            "roomTypes": [
                {
                    "name": "Deluxe Room",
                    "price": 800,
                    "facilities": ["Air Conditioning", "WiFi", "TV", "Mini Bar", "Safe", "City View"],
                    "maxOccupancy": 2,
                    "size": "35 sqm"
                },
                {
                    "name": "Executive Suite",
                    "price": 1500,
                    "facilities": ["Air Conditioning", "WiFi", "TV", "Mini Bar", "Safe", "Balcony", "Sofa", "Work Desk"],
                    "maxOccupancy": 4,
                    "size": "65 sqm"
                },
                {
                    "name": "Presidential Suite",
                    "price": 2000,
                    "facilities": ["Air Conditioning", "WiFi", "TV", "Mini Bar", "Safe", "Balcony", "Sofa", "Work Desk", "Kitchenette", "Bathtub"],
                    "maxOccupancy": 6,
                    "size": "120 sqm"
                }
            ],
            "nearbyAttractions": [
                {
                    "name": "Louvre Museum",
                    "distance": "1.2 km",
                    "description": {
                        "en": "World's largest art museum and historic monument",
                        "ar": "أكبر متحف فني في العالم ونصب تاريخي"
                    }
                },
                {
                    "name": "Eiffel Tower",
                    "distance": "2.5 km",
                    "description": {
                        "en": "Iconic iron lattice tower and symbol of Paris",
                        "ar": "برج حديدي شبكي أيقوني ورمز باريس"
                    }
                },
                {
                    "name": "Champs-Élysées",
                    "distance": "0.8 km",
                    "description": {
                        "en": "Famous avenue for shopping and entertainment",
                        "ar": "شارع شهير للتسوق والترفيه"
                    }
                }
            ],
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Luxury suite with city view",
                    "isPrimary": true
                },
                { "url": "https://picsum.photos/800/600", "caption": "Hotel lobby", "isPrimary": false },
                { "url": "https://picsum.photos/1000/600", "caption": "Restaurant view", "isPrimary": false }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "12:00" }
        })),
        (0, json!({
            "name": "Hotel Plaza Athénée",
            "description": {
                "en": "Iconic luxury hotel on Avenue Montaigne, featuring elegant rooms and exceptional dining experiences.",
                "ar": "فندق فاخر أيقوني على شارع مونتين، يتميز بغرف أنيقة وتجارب طعام استثنائية."
            },
            "address": { "street": "25 Avenue Montaigne", "city": "Paris", "postalCode": "75008" },
            "coordinates": { "latitude": 48.8656, "longitude": 2.3044 },
            "contact": {
                "phone": "+33 1 53 67 66 65",
                "email": "reservations@plaza-athenee-paris.com",
                "website": "https://www.dorchestercollection.com/paris/plaza-athenee"
            },
            "amenities": ["WiFi", "Spa", "Restaurant", "Bar", "Room Service", "Business Center"],
            "starRating": 5,
            "priceRange": { "min": 600, "max": 1800, "currency": "EUR" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Elegant lobby",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "12:00" }
        })),
        (1, json!({
            "name": "The Peninsula Tokyo",
            "description": {
                "en": "Five-star luxury hotel with stunning views of Tokyo and impeccable service. Located in the heart of the city.",
                "ar": "فندق فاخر بخمس نجوم مع إطلالات خلابة على طوكيو وخدمة لا تشوبها شائبة. يقع في قلب المدينة."
            },
            "address": { "street": "1-8-1 Yurakucho", "city": "Tokyo", "postalCode": "100-0006" },
            "coordinates": { "latitude": 35.6759, "longitude": 139.7634 },
            "contact": {
                "phone": "+81 3 6270 2888",
                "email": "ptokyo@peninsula.com",
                "website": "https://www.peninsula.com/tokyo"
            },
            "amenities": ["WiFi", "Spa", "Pool", "Restaurant", "Bar", "Business Center", "Gym"],
            "starRating": 5,
            "priceRange": { "min": 600, "max": 1500, "currency": "USD" },
            "roomTypes": [
                {
                    "name": "Standard Room",
                    "price": 600,
                    "facilities": ["Air Conditioning", "WiFi", "TV", "Safe", "City View"],
                    "maxOccupancy": 2,
                    "size": "28 sqm"
                },
                {
                    "name": "Deluxe Room",
                    "price": 900,
                    "facilities": ["Air Conditioning", "WiFi", "TV", "Mini Bar", "Safe", "City View", "Work Desk"],
                    "maxOccupancy": 3,
                    "size": "42 sqm"
                },
                {
                    "name": "Executive Suite",
                    "price": 1500,
                    "facilities": ["Air Conditioning", "WiFi", "TV", "Mini Bar", "Safe", "City View", "Sofa", "Work Desk", "Bathtub"],
                    "maxOccupancy": 4,
                    "size": "75 sqm"
                }
            ],
            "nearbyAttractions": [
                {
                    "name": "Tokyo Skytree",
                    "distance": "3.2 km",
                    "description": {
                        "en": "Tallest structure in Japan and broadcasting tower",
                        "ar": "أطول هيكل في اليابان وبرج البث"
                    }
                },
                {
                    "name": "Senso-ji Temple",
                    "distance": "2.8 km",
                    "description": {
                        "en": "Ancient Buddhist temple in Asakusa",
                        "ar": "معبد بوذي قديم في أساكوسا"
                    }
                },
                {
                    "name": "Tokyo Station",
                    "distance": "1.5 km",
                    "description": {
                        "en": "Major railway station and architectural landmark",
                        "ar": "محطة سكك حديدية رئيسية ومعلم معماري"
                    }
                }
            ],
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Tokyo skyline view from room",
                    "isPrimary": true
                },
                { "url": "https://picsum.photos/800/500", "caption": "Hotel exterior", "isPrimary": false },
                { "url": "https://picsum.photos/1000/500", "caption": "Spa area", "isPrimary": false }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "11:00" }
        })),
        (1, json!({
            "name": "Park Hyatt Tokyo",
            "description": {
                "en": "Luxury hotel in Shinjuku with panoramic city views, featuring world-class dining and spa facilities.",
                "ar": "فندق فاخر في شينجوكو مع إطلالات بانورامية على المدينة، يتميز بمطاعم عالمية المستوى ومرافق سبا."
            },
            "address": { "street": "3-7-1-2 Nishi-Shinjuku", "city": "Tokyo", "postalCode": "163-1055" },
            "coordinates": { "latitude": 35.6852, "longitude": 139.6906 },
            "contact": {
                "phone": "+81 3 5322 1234",
                "email": "tokyo.park@hyatt.com",
                "website": "https://www.hyatt.com/hotels/tokyo-park-hyatt"
            },
            "amenities": ["WiFi", "Spa", "Pool", "Restaurant", "Bar", "Business Center", "Gym", "Room Service"],
            "starRating": 5,
            "priceRange": { "min": 500, "max": 1200, "currency": "USD" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Modern room with city view",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "11:00" }
        })),
        (2, json!({
            "name": "Burj Al Arab",
            "description": {
                "en": "Iconic sail-shaped hotel, one of the most luxurious hotels in the world. Located on its own island with stunning views.",
                "ar": "فندق على شكل شراع أيقوني، أحد أفخر الفنادق في العالم. يقع على جزيرته الخاصة مع إطلالات خلابة."
            },
            "address": { "street": "Jumeirah Beach Road", "city": "Dubai", "postalCode": "00000" },
            "coordinates": { "latitude": 25.1413, "longitude": 55.1853 },
            "contact": {
                "phone": "+971 4 301 7777",
                "email": "baa@jumeirah.com",
                "website": "https://www.jumeirah.com/en/stay/dubai/burj-al-arab"
            },
            "amenities": ["WiFi", "Spa", "Pool", "Restaurant", "Bar", "Beach Access", "Helipad", "Room Service"],
            "starRating": 5,
            "priceRange": { "min": 1000, "max": 3000, "currency": "AED" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Iconic sail-shaped building",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "12:00" }
        })),
        (2, json!({
            "name": "Atlantis The Palm",
            "description": {
                "en": "Luxury resort on the iconic Palm Jumeirah, featuring underwater suites and world-class entertainment.",
                "ar": "منتجع فاخر على نخلة جميرا الشهيرة، يتميز بغرف تحت الماء وترفيه عالمي المستوى."
            },
            "address": { "street": "Crescent Road, Palm Jumeirah", "city": "Dubai", "postalCode": "00000" },
            "coordinates": { "latitude": 25.1124, "longitude": 55.1180 },
            "contact": {
                "phone": "+971 4 426 2000",
                "email": "reservations@atlantisthepalm.com",
                "website": "https://www.atlantisthepalm.com"
            },
            "amenities": ["WiFi", "Spa", "Pool", "Restaurant", "Bar", "Beach Access", "Aquarium", "Water Park"],
            "starRating": 5,
            "priceRange": { "min": 800, "max": 2500, "currency": "AED" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Underwater suite view",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "12:00" }
        })),
        (3, json!({
            "name": "The Plaza New York",
            "description": {
                "en": "Historic luxury hotel overlooking Central Park, known for its elegance and timeless charm.",
                "ar": "فندق فاخر تاريخي يطل على سنترال بارك، معروف بأناقته وسحره الخالد."
            },
            "address": { "street": "768 5th Avenue", "city": "New York", "postalCode": "10019" },
            "coordinates": { "latitude": 40.7648, "longitude": -73.9748 },
            "contact": {
                "phone": "+1 212 759 3000",
                "email": "reservations@theplazany.com",
                "website": "https://www.theplazany.com"
            },
            "amenities": ["WiFi", "Spa", "Restaurant", "Bar", "Room Service", "Business Center", "Parking"],
            "starRating": 5,
            "priceRange": { "min": 400, "max": 1200, "currency": "USD" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Historic lobby",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "12:00" }
        })),
        (4, json!({
            "name": "The Savoy London",
            "description": {
                "en": "Iconic luxury hotel on the River Thames, combining Edwardian elegance with modern amenities.",
                "ar": "فندق فاخر أيقوني على نهر التايمز، يجمع بين الأناقة الإدواردية والمرافق الحديثة."
            },
            "address": { "street": "Strand", "city": "London", "postalCode": "WC2R 0EU" },
            "coordinates": { "latitude": 51.5103, "longitude": -0.1206 },
            "contact": {
                "phone": "+44 20 7836 4343",
                "email": "reservations@thesavoylondon.com",
                "website": "https://www.fairmont.com/savoy-london"
            },
            "amenities": ["WiFi", "Spa", "Restaurant", "Bar", "Room Service", "Business Center", "Gym"],
            "starRating": 5,
            "priceRange": { "min": 350, "max": 1000, "currency": "GBP" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Elegant Thames view",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "12:00" }
        })),
        (5, json!({
            "name": "Park Hyatt Sydney",
            "description": {
                "en": "Luxury hotel with stunning views of the Sydney Opera House and Harbour Bridge.",
                "ar": "فندق فاخر مع إطلالات خلابة على دار أوبرا سيدني وجسر الميناء."
            },
            "address": { "street": "7 Hickson Road", "city": "Sydney", "postalCode": "2000" },
            "coordinates": { "latitude": -33.8587, "longitude": 151.2140 },
            "contact": {
                "phone": "+61 2 9256 1234",
                "email": "sydney.park@hyatt.com",
                "website": "https://www.hyatt.com/hotels/sydney-park-hyatt"
            },
            "amenities": ["WiFi", "Spa", "Pool", "Restaurant", "Bar", "Business Center", "Gym", "Room Service"],
            "starRating": 5,
            "priceRange": { "min": 500, "max": 1500, "currency": "AUD" },
            "images": [
                {
                    "url": "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=1000&q=80",
                    "caption": "Opera House view from room",
                    "isPrimary": true
                }
            ],
            "availability": { "isAvailable": true, "checkInTime": "15:00", "checkOutTime": "11:00" }
        })),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let base_url =
        env::var("TRAVEL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

    println!("{}Travel catalog seeder{} (target: {})", BOLD, RESET, base_url);

    let mut runner = SeedRunner::new(base_url)?;
    runner.run().await
}
