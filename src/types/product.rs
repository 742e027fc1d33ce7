use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use thiserror::Error;

/// A single shoppable item, tagged with the closed time interval
/// `[start_sec, end_sec]` on the reel timeline during which it is on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image_path: String,
    pub url: String,
    pub start_sec: u64,
    pub end_sec: u64,
}

impl Product {
    /// Whether this product's interval contains the given reel time.
    /// Both ends are inclusive, so adjacent intervals share their boundary second.
    pub fn contains_sec(&self, sec: u64) -> bool {
        sec >= self.start_sec && sec <= self.end_sec
    }

    /// URI the egui image loader understands for this product's card image.
    pub fn image_uri(&self) -> String {
        format!("file://{}", self.image_path)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product {id} has an inverted time range ({start_sec}..{end_sec})")]
    InvertedRange {
        id: String,
        start_sec: u64,
        end_sec: u64,
    },
}

/// The preloaded, ordered product list for one reel. Immutable after load;
/// intervals may overlap or leave gaps, no coverage is assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Save the catalog to a JSON file at the given path.
    pub fn save_to_file(&self, path: &str) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Load a catalog from a JSON file, rejecting products whose interval
    /// ends before it starts.
    pub fn load_from_file(path: &str) -> Result<Catalog, CatalogError> {
        let mut file = File::open(path)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        let catalog: Catalog = serde_json::from_str(&json)?;
        for p in &catalog.products {
            if p.start_sec > p.end_sec {
                return Err(CatalogError::InvertedRange {
                    id: p.id.clone(),
                    start_sec: p.start_sec,
                    end_sec: p.end_sec,
                });
            }
        }
        Ok(catalog)
    }

    /// The built-in demo catalog used when no catalog file is given.
    /// Time ranges match the bundled demo reel.
    pub fn demo() -> Self {
        Catalog::new(vec![
            Product {
                id: "p1".to_string(),
                name: "Black square neck Dress".to_string(),
                price: "₹1,679".to_string(),
                image_path: "assets/img1.png".to_string(),
                url: "https://www.myntra.com/dresses/athena/27234078/buy".to_string(),
                start_sec: 0,
                end_sec: 5,
            },
            Product {
                id: "p2".to_string(),
                name: "Chiffon Pink dress".to_string(),
                price: "₹1,154".to_string(),
                image_path: "assets/img2.png".to_string(),
                url: "https://www.myntra.com/dresses/antheaa/32121575/buy".to_string(),
                start_sec: 5,
                end_sec: 9,
            },
            Product {
                id: "p3".to_string(),
                name: "Floral Embroidery white".to_string(),
                price: "₹1,199".to_string(),
                image_path: "assets/img3.png".to_string(),
                url: "https://www.myntra.com/dresses/kalini/36964527/buy".to_string(),
                start_sec: 11,
                end_sec: 15,
            },
        ])
    }
}
