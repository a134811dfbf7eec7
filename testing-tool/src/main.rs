use anyhow::Result;
use colored::*;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚗 Vehicle Catalog Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());

    let base_url = std::env::var("CATALOG_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
    println!("🌐 Servidor: {}", base_url.bright_white());

    let client = Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📄 Listar vehículos");
        println!("2. 🚗 Crear coche");
        println!("3. 🏍️ Crear motocicleta");
        println!("4. 🔍 Obtener por id");
        println!("5. ✏️ Actualizar por id");
        println!("6. 🗑️ Eliminar por id");
        println!("7. 🚪 Salir");

        let choice = prompt("Selecciona una opción (1-7): ")?;

        match choice.as_str() {
            "1" => {
                let kind = ask_kind()?;
                call(&client, Method::GET, &format!("{}/{}", base_url, kind), None).await?;
            }
            "2" => {
                let payload = ask_car()?;
                call(&client, Method::POST, &format!("{}/cars", base_url), Some(payload)).await?;
            }
            "3" => {
                let payload = ask_motorcycle()?;
                call(&client, Method::POST, &format!("{}/motorcycles", base_url), Some(payload)).await?;
            }
            "4" => {
                let kind = ask_kind()?;
                let id = prompt("Id: ")?;
                call(&client, Method::GET, &format!("{}/{}/{}", base_url, kind, id), None).await?;
            }
            "5" => {
                let kind = ask_kind()?;
                let id = prompt("Id: ")?;
                let payload = if kind == "cars" { ask_car()? } else { ask_motorcycle()? };
                call(&client, Method::PUT, &format!("{}/{}/{}", base_url, kind, id), Some(payload)).await?;
            }
            "6" => {
                let kind = ask_kind()?;
                let id = prompt("Id: ")?;
                call(&client, Method::DELETE, &format!("{}/{}/{}", base_url, kind, id), None).await?;
            }
            "7" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Los campos numéricos se envían tal cual si parsean como número, para
/// poder probar también payloads inválidos
fn prompt_value(label: &str) -> Result<Value> {
    let raw = prompt(label)?;
    Ok(serde_json::from_str::<Value>(&raw).unwrap_or(Value::String(raw)))
}

fn ask_kind() -> Result<&'static str> {
    loop {
        match prompt("Tipo (c = cars, m = motorcycles): ")?.as_str() {
            "c" | "cars" => return Ok("cars"),
            "m" | "motorcycles" => return Ok("motorcycles"),
            _ => println!("{}", "❌ Tipo inválido".bright_red()),
        }
    }
}

fn ask_vehicle() -> Result<Value> {
    Ok(json!({
        "model": prompt("Modelo: ")?,
        "year": prompt_value("Año: ")?,
        "color": prompt("Color: ")?,
        "buyValue": prompt_value("Valor de compra: ")?,
    }))
}

fn ask_car() -> Result<Value> {
    let mut payload = ask_vehicle()?;
    payload["doorsQty"] = prompt_value("Puertas: ")?;
    payload["seatsQty"] = prompt_value("Asientos: ")?;
    Ok(payload)
}

fn ask_motorcycle() -> Result<Value> {
    let mut payload = ask_vehicle()?;
    payload["category"] = json!(prompt("Categoría (Street, Custom, Trail): ")?);
    payload["engineCapacity"] = prompt_value("Cilindrada: ")?;
    Ok(payload)
}

async fn call(client: &Client, method: Method, url: &str, payload: Option<Value>) -> Result<()> {
    println!();
    println!("{} {}", format!("📤 {}", method).bright_blue(), url);

    let mut request = client.request(method, url);
    if let Some(payload) = &payload {
        println!("{}", "📦 Payload:".bright_blue());
        println!("{}", serde_json::to_string_pretty(payload)?);
        request = request.json(payload);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            println!("{} {}", "❌ Error de conexión:".bright_red(), e);
            return Ok(());
        }
    };

    let status = response.status();
    let body = response.text().await?;

    let status_label = format!("📥 Status: {}", status);
    if status.is_success() {
        println!("{}", status_label.bright_green().bold());
    } else {
        println!("{}", status_label.bright_red().bold());
    }

    if body.is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", body),
    }
    Ok(())
}
