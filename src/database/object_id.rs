//! Identificadores estilo ObjectId
//!
//! 12 bytes representados como 24 caracteres hexadecimales en minúsculas:
//! 4 bytes de timestamp (segundos, big-endian), 5 bytes aleatorios únicos por
//! proceso y 3 bytes de contador.

use std::sync::atomic::{AtomicU32, Ordering};

use lazy_static::lazy_static;
use regex::Regex;

pub const OBJECT_ID_LENGTH: usize = 24;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

lazy_static! {
    static ref PROCESS_UNIQUE: [u8; 5] = rand::random();
    static ref COUNTER: AtomicU32 = AtomicU32::new(rand::random::<u32>() & COUNTER_MASK);
    static ref OBJECT_ID_RE: Regex = Regex::new(r"^[0-9a-fA-F]{24}$").expect("regex de ObjectId válida");
}

/// Genera un identificador nuevo
pub fn generate() -> String {
    let seconds = chrono::Utc::now().timestamp() as u32;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
    bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// `true` si `id` tiene exactamente 24 caracteres hexadecimales
pub fn is_valid(id: &str) -> bool {
    OBJECT_ID_RE.is_match(id)
}
