/// Final clustering report written to stdout.
///
/// One block per cluster:
/// 1. the member motifs,
/// 2. the consensus sequence,
/// 3. one alignment row per member (singleton clusters repeat the
///    consensus), sorted by descending lexicographic order,
/// followed by a blank line.
use std::io::{self, Write};

use bstr::{BStr, ByteSlice};

use crate::cluster::Cluster;

/// Gap symbol used to pad alignment rows.
pub const GAP: u8 = b'-';

/// Render one member motif against its cluster consensus: gap padding up to
/// the motif's first occurrence in the consensus, the motif itself, then gap
/// padding out to the consensus length.
///
/// A member that no longer occurs literally in the consensus (possible when
/// a mismatched overlap was merged) is rendered left-aligned.
fn alignment_row(consensus: &[u8], member: &[u8]) -> Vec<u8> {
    let pos = consensus.find(member).unwrap_or(0);
    let mut row = Vec::with_capacity(consensus.len());
    row.resize(pos, GAP);
    row.extend_from_slice(member);
    row.resize(row.len().max(consensus.len()), GAP);
    row
}

/// All alignment rows of a cluster, sorted by descending lexicographic
/// order. The ordering is a display convenience only.
pub fn alignment_rows(cluster: &Cluster) -> Vec<Vec<u8>> {
    let mut rows: Vec<Vec<u8>> = cluster
        .members
        .iter()
        .map(|m| alignment_row(&cluster.consensus, m))
        .collect();
    rows.sort_unstable_by(|a, b| b.cmp(a));
    rows
}

/// Write the cluster blocks of the selected clustering.
pub fn write_clustering<W: Write>(out: &mut W, clusters: &[Cluster]) -> io::Result<()> {
    for cluster in clusters {
        let members: Vec<&BStr> = cluster.members.iter().map(|m| m.as_bstr()).collect();
        writeln!(out, "{members:?}")?;
        writeln!(out, "{}", cluster.consensus.as_bstr())?;

        if cluster.members.len() == 1 {
            writeln!(out, "{}", cluster.consensus.as_bstr())?;
        } else {
            for row in alignment_rows(cluster) {
                writeln!(out, "{}", row.as_bstr())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
