//! Build every bundled dataset and print its face count and adjacency.
//!
//! Usage:
//!   cargo run -p facegraph --example face_counts

use facegraph::prelude::*;

fn main() {
    for name in Dataset::builtin_names() {
        let data = match Dataset::builtin(name) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        match data.check_face_count() {
            Ok((g, ok)) => {
                let verdict = if ok { "PASS" } else { "FAIL" };
                println!(
                    "{name:>16}: expected {}, actual {} {verdict}",
                    data.expect_face_count,
                    g.face_count()
                );
                for face in g.faces() {
                    let nbrs: Vec<usize> =
                        face.adjacent_face_indices().iter().map(|f| f.0).collect();
                    println!("{:>20} {:?} -> {:?}", "face", face.index().0, nbrs);
                }
            }
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
