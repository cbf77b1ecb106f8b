use super::blob::Blob;
use super::segment::{pack_row, Segment};
use crate::error::{PanelError, Result};
use crate::image::ImageView;

/// Row-by-row connected-component labelling over a binary mask.
///
/// Blobs live in an arena addressed by index. When a run bridges several
/// blobs the smaller ones are folded into the largest and their slots are
/// redirected through a union-find table, so ids handed out for the previous
/// row stay valid.
pub struct BlobExtractor {
    blobs: Vec<Option<Blob>>,
    parent: Vec<usize>,
}

impl Default for BlobExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobExtractor {
    pub fn new() -> Self {
        Self {
            blobs: Vec::new(),
            parent: Vec::new(),
        }
    }

    fn create(&mut self, row: i32, segment: Segment) -> usize {
        let id = self.blobs.len();
        self.blobs.push(Some(Blob::new(row, segment)));
        self.parent.push(id);
        id
    }

    fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = id;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn live(&mut self, id: usize) -> Result<&mut Blob> {
        self.blobs[id]
            .as_mut()
            .ok_or_else(|| PanelError::Consistency(format!("blob {id} was already merged away")))
    }

    /// Merge the blobs behind two roots; returns the surviving root.
    fn union(&mut self, a: usize, b: usize) -> Result<usize> {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return Ok(a);
        }
        let size = |blob: &Option<Blob>| blob.as_ref().map_or(0, |b| b.regions().len());
        let (keep, gone) = match size(&self.blobs[a]).cmp(&size(&self.blobs[b])) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => (a.min(b), a.max(b)),
        };
        let absorbed = self.blobs[gone].take().ok_or_else(|| {
            PanelError::Consistency(format!("blob {gone} was already merged away"))
        })?;
        self.live(keep)?.merge_with(absorbed)?;
        self.parent[gone] = keep;
        Ok(keep)
    }

    /// Label every 4-connected foreground region of `mask`.
    ///
    /// Blobs come out in the order their surviving slot was created, which
    /// makes the result a pure function of the mask.
    pub fn extract<I>(mut self, mask: &I) -> Result<Vec<Blob>>
    where
        I: ImageView<Pixel = bool>,
    {
        let mut prev_runs: Vec<Segment> = Vec::new();
        let mut prev_owners: Vec<usize> = Vec::new();

        for (y, row) in mask.rows().enumerate() {
            let y = y as i32;
            let runs = pack_row(row);
            let mut owners = Vec::with_capacity(runs.len());
            let mut j = 0;

            for &run in &runs {
                while j < prev_runs.len() && prev_runs[j].to <= run.from {
                    j += 1;
                }
                let mut owner: Option<usize> = None;
                let mut k = j;
                while k < prev_runs.len() && prev_runs[k].from < run.to {
                    let above = self.find(prev_owners[k]);
                    owner = Some(match owner {
                        None => above,
                        Some(o) => self.union(o, above)?,
                    });
                    k += 1;
                }
                let id = match owner {
                    Some(o) => {
                        self.live(o)?.add_region(y, run);
                        o
                    }
                    None => self.create(y, run),
                };
                owners.push(id);
                // the last run touched above may reach under the next run too
                if k > j {
                    j = k - 1;
                }
            }

            prev_runs = runs;
            prev_owners = owners;
        }

        let blobs: Vec<Blob> = self.blobs.into_iter().flatten().collect();
        log::debug!(
            "blob extraction: {} blobs from {}x{} mask",
            blobs.len(),
            mask.width(),
            mask.height()
        );
        Ok(blobs)
    }
}
