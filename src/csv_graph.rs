/*
CSV loading and export.

Input: a header line, then one `from,to,weight` row per directed edge. A row holding only `from`
declares a vertex with no edges. Output: one `vertex,distance,previous,path` row per vertex, sorted
by distance, with `inf` for unreachable vertices.
*/

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use std::io;
use std::path::Path;
use tracing::info;

use crate::error::LoadError;
use crate::graph::{Graph, VertexId, Weight};
use crate::shortest_paths::ShortestPaths;

pub fn read_graph_from_path(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    build_graph(rdr)
}

pub fn read_graph<R: io::Read>(reader: R) -> Result<Graph, LoadError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    build_graph(rdr)
}

fn build_graph<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        add_row(&mut graph, &record, line)?;
    }
    info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &'static str,
    line: u64,
) -> Result<&'r str, LoadError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        other => Err(LoadError::Parse {
            line,
            field: name,
            value: other.unwrap_or_default().to_string(),
        }),
    }
}

fn add_row(graph: &mut Graph, record: &StringRecord, line: u64) -> Result<(), LoadError> {
    let from = field(record, 0, "from", line)?;
    if record.len() == 1 {
        graph.add_vertex(from);
        return Ok(());
    }
    let to = field(record, 1, "to", line)?;
    let raw_weight = field(record, 2, "weight", line)?;
    let weight: Weight = raw_weight.parse().map_err(|_| LoadError::Parse {
        line,
        field: "weight",
        value: raw_weight.to_string(),
    })?;
    graph
        .connect(from, to, weight)
        .map_err(|source| LoadError::Graph { line, source })?;
    Ok(())
}

fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        format!("{:.6}", distance)
    } else {
        String::from("inf")
    }
}

/// Writes one row per vertex, nearest first. Unreachable vertices are written only when
/// `include_unreachable` is set. Returns the number of rows written.
pub fn write_paths<W: io::Write>(
    graph: &Graph,
    paths: &ShortestPaths,
    writer: W,
    include_unreachable: bool,
) -> Result<usize, csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["vertex", "distance", "previous", "path"])?;

    let mut rows: Vec<_> = paths
        .iter()
        .filter(|&(_, d, _)| d.is_finite() || include_unreachable)
        .collect();
    rows.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let label = |vertex: VertexId| graph.label(vertex).unwrap_or_default();
    for &(vertex, distance, previous) in &rows {
        let route = paths
            .path_to(vertex)
            .map(|path| path.into_iter().map(label).collect::<Vec<_>>().join(">"))
            .unwrap_or_default();
        wtr.write_record([
            label(vertex),
            format_distance(distance).as_str(),
            previous.map(label).unwrap_or_default(),
            route.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra;
    use std::io::Write;

    const SAMPLE: &str = "from,to,weight\n\
                          A,B,1\n\
                          A,C,4\n\
                          B,C,2\n\
                          B,D,5\n\
                          C,D,1\n\
                          E\n";

    #[test]
    fn reads_edges_and_isolated_vertices() {
        let graph = read_graph(SAMPLE.as_bytes()).unwrap();
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.edge_count(), 5);
        let e = graph.find("E").unwrap();
        assert_eq!(graph.vertex(e).unwrap().out_degree(), 0);
    }

    #[test]
    fn trims_whitespace() {
        let graph = read_graph("from, to, weight\n A , B , 2.5 \n".as_bytes()).unwrap();
        let (a, b) = (graph.find("A").unwrap(), graph.find("B").unwrap());
        assert_eq!(graph.vertex(a).unwrap().weight_to(b), Some(2.5));
    }

    #[test]
    fn reports_bad_rows() {
        match read_graph("from,to,weight\nA,B,1\nA,C,heavy\n".as_bytes()) {
            Err(LoadError::Parse { line, field, value }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
        match read_graph("from,to,weight\nA,,1\n".as_bytes()) {
            Err(LoadError::Parse { field, .. }) => assert_eq!(field, "to"),
            other => panic!("expected a parse error, got {:?}", other),
        }
        match read_graph("from,to,weight\nA,B\n".as_bytes()) {
            Err(LoadError::Parse { field, .. }) => assert_eq!(field, "weight"),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_weights() {
        match read_graph("from,to,weight\nA,B,-3\n".as_bytes()) {
            Err(LoadError::Graph { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, crate::error::GraphError::InvalidWeight { .. }));
            }
            other => panic!("expected a graph error, got {:?}", other),
        }
    }

    #[test]
    fn reads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();
        let graph = read_graph_from_path(file.path()).unwrap();
        assert_eq!(graph.len(), 5);
        assert!(read_graph_from_path(file.path().with_extension("missing")).is_err());
    }

    #[test]
    fn writes_sorted_rows() {
        let graph = read_graph(SAMPLE.as_bytes()).unwrap();
        let paths = dijkstra::run(&graph, graph.find("A").unwrap()).unwrap();

        let mut out = Vec::new();
        let rows = write_paths(&graph, &paths, &mut out, false).unwrap();
        assert_eq!(rows, 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "vertex,distance,previous,path\n\
             A,0.000000,,A\n\
             B,1.000000,A,A>B\n\
             C,3.000000,B,A>B>C\n\
             D,4.000000,C,A>B>C>D\n"
        );

        let mut out = Vec::new();
        let rows = write_paths(&graph, &paths, &mut out, true).unwrap();
        assert_eq!(rows, 5);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("E,inf,,\n"));
    }
}
