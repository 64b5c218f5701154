use crate::utils::Result;
use rust_htslib::faidx;
use std::collections::HashMap;

/// Borrowed view of one cached sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedSequence<'a> {
    pub name: &'a str,
    pub id: usize,
    pub bases: &'a [u8],
}

impl CachedSequence<'_> {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

#[derive(Debug, Clone)]
struct SequenceRecord {
    name: String,
    offset: usize,
    len: usize,
}

/// Sequences loaded as a single contiguous block, addressable by id or by name.
///
/// Ids are assigned in load order starting at 0.
#[derive(Debug, Default)]
pub struct SequenceCache {
    data: Vec<u8>,
    records: Vec<SequenceRecord>,
    name_to_ordinal: HashMap<String, usize>,
}

impl SequenceCache {
    pub fn from_records<N, B, I>(records: I) -> Result<Self>
    where
        N: Into<String>,
        B: AsRef<[u8]>,
        I: IntoIterator<Item = (N, B)>,
    {
        let mut cache = Self::default();
        for (name, bases) in records {
            cache.push(name.into(), bases.as_ref())?;
        }
        Ok(cache)
    }

    /// Fetches the named sequences from an indexed FASTA. Repeated names are loaded once.
    pub fn load_from_fasta<S: AsRef<str>>(reader: &faidx::Reader, names: &[S]) -> Result<Self> {
        let seq_lens = create_seq_len_lookup(reader)?;
        let mut cache = Self::default();
        for name in names {
            let name = name.as_ref();
            if cache.name_to_ordinal.contains_key(name) {
                continue;
            }
            let len = *seq_lens
                .get(name)
                .ok_or_else(|| format!("FASTA file does not contain sequence '{}'", name))?;
            let bases = fetch_sequence(reader, name, len)?;
            cache.push(name.to_string(), &bases)?;
        }
        log::debug!(
            "Loaded {} sequences ({} bases) into the sequence cache",
            cache.len(),
            cache.data.len()
        );
        Ok(cache)
    }

    fn push(&mut self, name: String, bases: &[u8]) -> Result<()> {
        if self.name_to_ordinal.contains_key(&name) {
            return Err(format!("Duplicate sequence name: '{}'", name));
        }
        let ordinal = self.records.len();
        self.records.push(SequenceRecord {
            name: name.clone(),
            offset: self.data.len(),
            len: bases.len(),
        });
        self.data.extend_from_slice(bases);
        self.name_to_ordinal.insert(name, ordinal);
        Ok(())
    }

    pub fn get_by_id(&self, id: usize) -> Result<CachedSequence<'_>> {
        self.records
            .get(id)
            .map(|record| self.view(id, record))
            .ok_or_else(|| format!("Sequence id {} is not in the sequence cache", id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<CachedSequence<'_>> {
        let ordinal = *self
            .name_to_ordinal
            .get(name)
            .ok_or_else(|| format!("Sequence '{}' is not in the sequence cache", name))?;
        Ok(self.view(ordinal, &self.records[ordinal]))
    }

    pub fn records(&self) -> impl Iterator<Item = CachedSequence<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(move |(id, record)| self.view(id, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn view<'a>(&'a self, id: usize, record: &'a SequenceRecord) -> CachedSequence<'a> {
        CachedSequence {
            name: &record.name,
            id,
            bases: &self.data[record.offset..record.offset + record.len],
        }
    }
}

fn create_seq_len_lookup(reader: &faidx::Reader) -> Result<HashMap<String, usize>> {
    let num_seqs = reader.n_seqs() as usize;
    let mut map = HashMap::with_capacity(num_seqs);
    for i in 0..num_seqs {
        let name = reader.seq_name(i as i32).map_err(|e| e.to_string())?;
        let len = reader.fetch_seq_len(&name) as usize;
        map.insert(name, len);
    }
    Ok(map)
}

fn fetch_sequence(reader: &faidx::Reader, name: &str, len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    reader
        .fetch_seq_string(name, 0, len - 1)
        .map(|seq| seq.to_uppercase().into_bytes())
        .map_err(|e| format!("Error fetching sequence '{}': {}", name, e))
}
