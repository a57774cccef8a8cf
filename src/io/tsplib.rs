//! TSPLIB-style coordinate file reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Node;

/// Marker line that separates the header from the coordinate records.
pub const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";

/// A parsed problem instance: header metadata and cities in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    /// `NAME` header value.
    pub name: Option<String>,
    /// `COMMENT` header value.
    pub comment: Option<String>,
    /// `DIMENSION` header value, the declared number of cities.
    pub dimension: Option<usize>,
    /// `EDGE_WEIGHT_TYPE` header value.
    pub edge_weight_type: Option<String>,
    /// Cities in the order they appear in the file.
    pub nodes: Vec<Node>,
}

/// Parses an instance from a reader.
///
/// Header lines of the form `KEY : VALUE` are read up to the line starting
/// with `NODE_COORD_SECTION`. After it, every line holds one `<id> <x> <y>`
/// record. Reading stops at end of input or at the first line whose leading
/// token is not an id (such as `EOF`).
///
/// # Errors
///
/// * [`Error::Io`] if reading fails
/// * [`Error::MissingSection`] if the section marker never appears
/// * [`Error::MalformedRecord`] for an invalid `DIMENSION` or a record with a
///   valid id but missing, invalid or non-finite coordinates
///
/// # Examples
///
/// ```
/// use nn_tour::io::parse_instance;
///
/// let text = "NAME : tiny\nDIMENSION : 2\nNODE_COORD_SECTION\n1 0 0\n2 3.5 4\nEOF\n";
/// let instance = parse_instance(text.as_bytes()).unwrap();
/// assert_eq!(instance.name.as_deref(), Some("tiny"));
/// assert_eq!(instance.nodes.len(), 2);
/// assert_eq!(instance.nodes[1].x(), 3.5);
/// ```
pub fn parse_instance<R: BufRead>(reader: R) -> Result<Instance> {
    let mut instance = Instance::default();
    let mut lines = reader.lines().enumerate();

    let mut in_section = false;
    for (idx, line) in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.starts_with(NODE_COORD_SECTION) {
            in_section = true;
            break;
        }
        parse_header_line(&mut instance, trimmed, idx + 1)?;
    }
    if !in_section {
        return Err(Error::MissingSection(NODE_COORD_SECTION));
    }

    for (idx, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_record(trimmed, idx + 1)? {
            Some(node) => instance.nodes.push(node),
            None => {
                log::debug!("stopping at line {}: {trimmed:?}", idx + 1);
                break;
            }
        }
    }

    if let Some(dim) = instance.dimension {
        if dim != instance.nodes.len() {
            log::warn!(
                "DIMENSION declares {dim} cities but {} records were read",
                instance.nodes.len()
            );
        }
    }
    log::info!(
        "loaded instance name={} cities={}",
        instance.name.as_deref().unwrap_or("-"),
        instance.nodes.len()
    );

    Ok(instance)
}

/// Reads an instance from a file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Instance> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        log::error!("could not read file {}: {e}", path.display());
        e
    })?;
    parse_instance(BufReader::new(file))
}

/// Reads only the cities of an instance file.
pub fn read_nodes(path: impl AsRef<Path>) -> Result<Vec<Node>> {
    Ok(read_instance(path)?.nodes)
}

fn parse_header_line(instance: &mut Instance, line: &str, line_no: usize) -> Result<()> {
    let Some((key, value)) = line.split_once(':') else {
        return Ok(());
    };
    let value = value.trim().to_string();
    match key.trim() {
        "NAME" => instance.name = Some(value),
        "COMMENT" => instance.comment = Some(value),
        "EDGE_WEIGHT_TYPE" => instance.edge_weight_type = Some(value),
        "DIMENSION" => {
            let dim = value
                .parse::<usize>()
                .map_err(|_| Error::malformed(line_no, format!("invalid DIMENSION: {value}")))?;
            instance.dimension = Some(dim);
        }
        _ => {}
    }
    Ok(())
}

/// Returns `None` when the leading token is not an id, which ends the section.
fn parse_record(line: &str, line_no: usize) -> Result<Option<Node>> {
    let mut tokens = line.split_whitespace();
    let Some(Ok(id)) = tokens.next().map(str::parse::<usize>) else {
        return Ok(None);
    };

    let mut coord = |axis: &str| -> Result<f64> {
        let tok = tokens
            .next()
            .ok_or_else(|| Error::malformed(line_no, format!("missing {axis} coordinate")))?;
        let v: f64 = tok
            .parse()
            .map_err(|_| Error::malformed(line_no, format!("invalid {axis} coordinate: {tok}")))?;
        if !v.is_finite() {
            return Err(Error::malformed(
                line_no,
                format!("non-finite {axis} coordinate: {tok}"),
            ));
        }
        Ok(v)
    };
    let x = coord("x")?;
    let y = coord("y")?;

    if let Some(extra) = tokens.next() {
        return Err(Error::malformed(
            line_no,
            format!("expected '<id> <x> <y>' but got extra field: {extra}"),
        ));
    }

    Ok(Some(Node::new(id, x, y)))
}
