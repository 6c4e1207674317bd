use std::collections::BTreeMap;
use std::sync::mpsc;
use std::sync::Arc;

use threadpool::ThreadPool;

pub type Symbol = char;

/// Occurrence count per symbol, ordered by symbol.
pub type FrequencyTable = BTreeMap<Symbol, usize>;

const MIN_CHUNK_LEN: usize = 4096;

pub fn count_frequencies(text: &str) -> FrequencyTable {
    text.chars().fold(FrequencyTable::new(), |mut table, symbol| {
        *table.entry(symbol).or_insert(0) += 1;
        table
    })
}

/// Counts symbols of `text` on `threadpool`, one job per chunk. The partial
/// tables are merged on the calling thread.
pub fn count_frequencies_parallel(text: &str, threadpool: &ThreadPool) -> FrequencyTable {
    let chunk_len = (text.len() / threadpool.max_count().max(1)).max(MIN_CHUNK_LEN);
    if text.len() <= chunk_len {
        return count_frequencies(text);
    }

    let text: Arc<str> = Arc::from(text);
    let (sender, receiver) = mpsc::channel();
    let mut jobs = 0;
    for range in chunk_ranges(&text, chunk_len) {
        let text = Arc::clone(&text);
        let sender = sender.clone();
        threadpool.execute(move || {
            let _ = sender.send(count_frequencies(&text[range]));
        });
        jobs += 1;
    }
    drop(sender);
    log::debug!("counting symbols in {} chunks", jobs);

    receiver.iter().fold(FrequencyTable::new(), |mut table, partial| {
        merge_into(&mut table, partial);
        table
    })
}

pub fn merge_into(table: &mut FrequencyTable, partial: FrequencyTable) {
    for (symbol, count) in partial {
        *table.entry(symbol).or_insert(0) += count;
    }
}

/// Splits `text` into byte ranges of roughly `chunk_len` that never cut a
/// UTF-8 sequence.
fn chunk_ranges(text: &str, chunk_len: usize) -> Vec<std::ops::Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let mut end = (start + chunk_len).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        ranges.push(start..end);
        start = end;
    }
    ranges
}
