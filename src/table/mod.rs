use crate::{ElementRecord, ElementRepository, Error, Result};
use csv::{ReaderBuilder, StringRecord};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::*;

lazy_static! {
    /// The periodic table shipped with the crate, parsed on first use.
    static ref BUILTIN_TABLE: PeriodicTable = {
        let csv_data = include_str!("elements.csv");
        // The embedded data is validated by `test_builtin_table`.
        PeriodicTable::from_csv_str(csv_data).expect("built-in periodic table is malformed")
    };
}

/// An immutable periodic table loaded from `name,symbol,number,weight` rows.
///
/// Elements are kept in file order, with indexes by symbol, lowercase name
/// and atomic number for [`search`](ElementRepository::search).
#[derive(Debug, Clone, Default)]
pub struct PeriodicTable {
    elements: Vec<ElementRecord>,
    by_symbol: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    by_number: HashMap<u32, usize>,
}

impl PeriodicTable {
    /// The built-in table of all 118 elements.
    pub fn builtin() -> &'static PeriodicTable {
        &BUILTIN_TABLE
    }

    /// Reads a headerless CSV table, failing on the first malformed row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        // Column counts are checked per row so the error can say which line is bad.
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = PeriodicTable::default();
        let mut record = StringRecord::new();
        while rdr.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            // Tolerate blank trailing lines.
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            let element = ElementRecord::from_row(&record, line)?;
            table.insert(element, line)?;
        }

        info!("Loaded periodic table with {} elements", table.len());
        Ok(table)
    }

    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::from_io(e, path))?;
        debug!("Reading periodic table from {}", path.display());
        Self::from_reader(file)
    }

    fn insert(&mut self, element: ElementRecord, line: u64) -> Result<()> {
        if self.by_symbol.contains_key(&element.symbol) {
            return Err(Error::DuplicateSymbol {
                symbol: element.symbol,
                line,
            });
        }

        let index = self.elements.len();
        self.by_symbol.insert(element.symbol.clone(), index);
        self.by_name
            .entry(element.name.to_lowercase())
            .or_insert(index);
        self.by_number.entry(element.atomic_number).or_insert(index);
        self.elements.push(element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements.iter()
    }

    pub fn by_name(&self, name: &str) -> Option<&ElementRecord> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.elements[i])
    }

    pub fn by_number(&self, number: u32) -> Option<&ElementRecord> {
        self.by_number.get(&number).map(|&i| &self.elements[i])
    }

    pub fn by_weight(&self, weight: f64) -> Option<&ElementRecord> {
        self.elements.iter().find(|e| e.atomic_weight == weight)
    }
}

impl ElementRepository for PeriodicTable {
    fn lookup(&self, symbol: &str) -> Option<&ElementRecord> {
        self.by_symbol.get(symbol).map(|&i| &self.elements[i])
    }

    /// Tries the key as a name, then a symbol, then an atomic number,
    /// then an atomic weight.
    fn search(&self, key: &str) -> Option<&ElementRecord> {
        let key = key.trim();
        let found = self
            .by_name(key)
            .or_else(|| self.lookup(key))
            .or_else(|| key.parse::<u32>().ok().and_then(|n| self.by_number(n)))
            .or_else(|| key.parse::<f64>().ok().and_then(|w| self.by_weight(w)));

        match found {
            Some(element) => debug!("Search '{}' matched {}", key, element.symbol),
            None => debug!("Search '{}' matched nothing", key),
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.len(), 118);

        // Atomic numbers run 1..=118 in file order.
        for (i, element) in table.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1, "{:?}", element);
        }

        assert_eq!(table.lookup("H").unwrap().atomic_weight, 1.008);
        assert_eq!(table.lookup("O").unwrap().atomic_weight, 15.999);
        assert_eq!(table.lookup("Na").unwrap().atomic_weight, 22.990);
        assert_eq!(table.lookup("Cl").unwrap().atomic_weight, 35.45);
        assert_eq!(table.lookup("Og").unwrap().atomic_number, 118);
    }

    #[test]
    fn test_search() {
        let table = PeriodicTable::builtin();

        assert_eq!(table.search("Oxygen").unwrap().symbol, "O");
        assert_eq!(table.search("oxygen").unwrap().symbol, "O");
        assert_eq!(table.search("Fe").unwrap().name, "Iron");
        assert_eq!(table.search("26").unwrap().symbol, "Fe");
        assert_eq!(table.search("55.845").unwrap().symbol, "Fe");
        assert_eq!(table.search(" 1 ").unwrap().symbol, "H");

        assert!(table.search("fe").is_none());
        assert!(table.search("Xx").is_none());
        assert!(table.search("0").is_none());
        assert!(table.search("").is_none());
    }

    #[test]
    fn test_load_from_str() -> Result<()> {
        let table = PeriodicTable::from_csv_str("Hydrogen,H,1,1.008\nOxygen,O,8,15.999\n\n")?;
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("O").map(|e| e.atomic_number), Some(8));
        assert!(table.lookup("C").is_none());
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_rows() {
        match PeriodicTable::from_csv_str("Hydrogen,H,1,1.008\nOxygen,O,8\n") {
            Err(Error::InvalidRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected invalid row, got {:?}", other),
        }

        match PeriodicTable::from_csv_str("Hydrogen,H,1,1.008\nHydrogen-2,H,1,2.014\n") {
            Err(Error::DuplicateSymbol { symbol, line }) => {
                assert_eq!(symbol, "H");
                assert_eq!(line, 2);
            }
            other => panic!("expected duplicate symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match PeriodicTable::from_path("/nonexistent/elements.csv") {
            Err(Error::Io { path, .. }) => assert!(path.ends_with("elements.csv")),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
