/**
 * Product Handler Types
 */

use serde::{Deserialize, Serialize};

use crate::backend::products::db::NewProduct;
use crate::shared::error::{require, SharedError};

/// Body of POST /products and PUT /products/{pid}
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ProductRequest {
    pub pname: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl ProductRequest {
    pub fn validate(self) -> Result<NewProduct, SharedError> {
        Ok(NewProduct {
            pname: require(self.pname, "pname")?,
            description: require(self.description, "description")?,
            price: require(self.price, "price")?,
            stock: require(self.stock, "stock")?,
        })
    }
}

/// Response of POST /products
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProductCreated {
    pub message: String,
    pub pid: i64,
}
