//! Menu API Client
//!
//! HTTP bindings to the backend REST API under `/api`. Each call is a
//! single fire-and-await request; failures surface to the caller as
//! their message string.

use reqwest::Client;

use crate::models::{MenuItem, MenuItemPatch, NewMenuItem};

const API_BASE: &str = "/api";

pub async fn fetch_menu() -> Result<Vec<MenuItem>, String> {
    let response = Client::new()
        .get(format!("{}/menu", API_BASE))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response
        .error_for_status()
        .map_err(|e| e.to_string())?
        .json::<Vec<MenuItem>>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_menu_item(item: &NewMenuItem) -> Result<MenuItem, String> {
    let response = Client::new()
        .post(format!("{}/menu", API_BASE))
        .json(item)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response
        .error_for_status()
        .map_err(|e| e.to_string())?
        .json::<MenuItem>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_menu_item(id: u32, patch: &MenuItemPatch) -> Result<MenuItem, String> {
    let response = Client::new()
        .patch(format!("{}/menu/{}", API_BASE, id))
        .json(patch)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response
        .error_for_status()
        .map_err(|e| e.to_string())?
        .json::<MenuItem>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_menu_item(id: u32) -> Result<(), String> {
    let response = Client::new()
        .delete(format!("{}/menu/{}", API_BASE, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.error_for_status().map_err(|e| e.to_string())?;
    Ok(())
}
