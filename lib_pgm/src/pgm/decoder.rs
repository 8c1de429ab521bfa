use std::str::FromStr;

use log::{debug, error, info};
use thiserror::Error;

use super::format::PgmData;
use crate::constants::{MAGIC_NUMBER, MAX_PGM_VALUE};
use crate::image::Pixel;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid magic number, expected P2")]
    InvalidMagic,
    #[error("Missing header field: {0}")]
    MissingField(&'static str),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Image has a zero dimension")]
    EmptyImage,
    #[error("Max value {0} is outside 1..=65535")]
    InvalidMaxVal(i64),
    #[error("Image of {width}x{height} pixels is too large")]
    TooLarge { width: usize, height: usize },
    #[error("Unexpected end of pixel data: expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Drops a trailing `#` comment from a line.
fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(body, _)| body)
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, DecodeError> {
    token.parse().map_err(|_| {
        error!("Failed to parse {:?} as a number", token);
        DecodeError::InvalidNumber(token.to_string())
    })
}

fn next_field<'a, T, I>(tokens: &mut I, field: &'static str) -> Result<T, DecodeError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| {
        error!("Header ended before {}", field);
        DecodeError::MissingField(field)
    })?;
    parse_token(token)
}

/// Parses the text of a plain (`P2`) gray map.
pub fn decode(text: &str) -> Result<PgmData, DecodeError> {
    let mut tokens = text
        .lines()
        .flat_map(|line| strip_comment(line).split_whitespace());

    // Check the magic number
    if tokens.next() != Some(MAGIC_NUMBER) {
        error!("Invalid format or missing magic number in header");
        return Err(DecodeError::InvalidMagic);
    }

    let width: usize = next_field(&mut tokens, "width")?;
    let height: usize = next_field(&mut tokens, "height")?;
    let max_val: i64 = next_field(&mut tokens, "max value")?;
    debug!(
        "Header read: width={} height={} max_val={}",
        width, height, max_val
    );

    if width == 0 || height == 0 {
        error!("Refusing {}x{} image", width, height);
        return Err(DecodeError::EmptyImage);
    }
    if !(1..=MAX_PGM_VALUE as i64).contains(&max_val) {
        error!("Max value {} out of range", max_val);
        return Err(DecodeError::InvalidMaxVal(max_val));
    }

    let expected = width.checked_mul(height).ok_or_else(|| {
        error!("Pixel count of {}x{} overflows", width, height);
        DecodeError::TooLarge { width, height }
    })?;
    // Every value takes at least a digit and a separator
    let mut data: Vec<Pixel> = Vec::with_capacity(expected.min(text.len() / 2 + 1));
    for token in tokens.by_ref().take(expected) {
        data.push(parse_token(token)?);
    }
    if data.len() < expected {
        error!("Pixel data stops after {} of {} values", data.len(), expected);
        return Err(DecodeError::Truncated {
            expected,
            found: data.len(),
        });
    }

    if tokens.next().is_some() {
        debug!("Ignoring trailing tokens after pixel data");
    }

    info!("Decoded {}x{} gray map", width, height);
    Ok(PgmData::new(width, height, max_val as Pixel, data))
}
