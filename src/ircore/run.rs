use std::io::{self, Write};

/// Writes ranked lists in TREC run format.
///
/// Each line is `<query id> 0 <doc id> <rank> <score> <label>` with 1-based
/// ranks, at most `top_k` lines per query.
pub struct RunWriter<W: Write> {
    writer: W,
    label: String,
    top_k: usize,
}

impl<W: Write> RunWriter<W> {
    pub fn new(writer: W, label: &str, top_k: usize) -> Self {
        RunWriter {
            writer,
            label: label.to_string(),
            top_k,
        }
    }

    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Returns the number of lines written for this query.
    pub fn write_ranking(&mut self, query_id: &str, ranked: &[(&str, f64)]) -> io::Result<usize> {
        let mut written = 0;
        for (rank, (doc_id, score)) in ranked.iter().take(self.top_k).enumerate() {
            writeln!(
                self.writer,
                "{} 0 {} {} {} {}",
                query_id,
                doc_id,
                rank + 1,
                score,
                self.label
            )?;
            written += 1;
        }
        Ok(written)
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
