//! Graphviz-flavoured text export and import.
//!
//! ```text
//! graph Name{
//! N_0 -> N_1 [label=3];
//! N_1 -> N_2 [label=1, color=red];
//! N_7;
//! }
//! ```
//!
//! Edges are written in insertion order, isolated nodes follow as bare names.

use std::fmt::Write as _;
use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DEFAULT_WEIGHT, Weight};
use crate::error::{GraphError, Result};
use crate::storage::{Graph, Node};

pub trait DotDisplay {
    fn to_dot(&self) -> String;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Emit `[label=<weight>]` on every edge.
    pub weighted: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { weighted: true }
    }
}

impl DotDisplay for Graph {
    fn to_dot(&self) -> String {
        render_dot(self, &DotOptions::default())
    }
}

pub fn render_dot(graph: &Graph, options: &DotOptions) -> String {
    let mut out = String::new();
    let keyword = if graph.is_directed() { "digraph" } else { "graph" };
    // writing into a String cannot fail
    let _ = writeln!(out, "{keyword} {}{{", graph.name());

    for (id, edge) in graph.edges() {
        let (from, to) = graph.edge_names(id);
        let _ = write!(out, "{from} -> {to}");
        if options.weighted {
            let _ = write!(out, " [label={}", edge.weight());
            if edge.is_highlighted() {
                out.push_str(", color=red");
            }
            out.push(']');
        }
        out.push_str(";\n");
    }

    for (_, node) in graph.nodes().filter(|(_, node)| node.degree() == 0) {
        let _ = writeln!(out, "{};", node.name());
    }

    out.push_str("}\n");
    out
}

pub fn write_dot<W: io::Write>(graph: &Graph, writer: &mut W, options: &DotOptions) -> Result<()> {
    writer.write_all(render_dot(graph, options).as_bytes())?;
    Ok(())
}

pub fn parse_dot(input: &str) -> Result<Graph> {
    let mut parser = DotParser::default();
    for (i, line) in input.lines().enumerate() {
        parser.feed(i + 1, line)?;
    }
    parser.finish()
}

pub fn read_dot<R: BufRead>(reader: R) -> Result<Graph> {
    let mut parser = DotParser::default();
    for (i, line) in reader.lines().enumerate() {
        parser.feed(i + 1, &line?)?;
    }
    parser.finish()
}

#[derive(Default)]
enum State {
    #[default]
    Header,
    Body(Graph),
    Closed(Graph),
}

#[derive(Default)]
struct DotParser {
    state: State,
    last_line: usize,
}

/// One body line split into endpoint tokens and bracket attributes.
struct Statement<'a> {
    tokens: Vec<&'a str>,
    label: Option<&'a str>,
    highlighted: bool,
}

fn split_statement(line_no: usize, line: &str) -> Result<Statement<'_>> {
    let line = line.trim().trim_end_matches(';');
    let (head, attributes) = match line.split_once('[') {
        Some((head, rest)) => {
            let inner = rest
                .trim_end_matches(';')
                .trim_end()
                .strip_suffix(']')
                .ok_or_else(|| GraphError::parse(line_no, "unterminated attribute list"))?;
            (head, Some(inner))
        }
        None => (line, None),
    };

    let mut statement = Statement {
        tokens: head
            .split_whitespace()
            .filter(|token| !matches!(*token, "->" | "--"))
            .collect(),
        label: None,
        highlighted: false,
    };
    for attribute in attributes.into_iter().flat_map(|a| a.split(',')) {
        match attribute.trim().split_once('=') {
            Some(("label", value)) => statement.label = Some(value.trim().trim_matches('"')),
            Some(("color", value)) => {
                statement.highlighted = value.trim().trim_matches('"') == "red"
            }
            _ => {}
        }
    }
    Ok(statement)
}

fn parse_weight(line_no: usize, token: &str) -> Result<Weight> {
    token
        .parse()
        .map_err(|_| GraphError::parse(line_no, format!("weight `{token}` is not an integer")))
}

impl DotParser {
    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.last_line = line_no;
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        match &mut self.state {
            State::Header => {
                self.state = State::Body(parse_header(line_no, line)?);
            }
            State::Body(_) if line == "}" => {
                if let State::Body(graph) = std::mem::take(&mut self.state) {
                    self.state = State::Closed(graph);
                }
            }
            State::Body(graph) => add_statement(graph, line_no, line)?,
            State::Closed(_) => {
                return Err(GraphError::parse(line_no, "content after closing brace"));
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Graph> {
        match self.state {
            State::Closed(graph) => {
                debug!(
                    graph = graph.name(),
                    nodes = graph.order(),
                    edges = graph.size(),
                    "graph imported"
                );
                Ok(graph)
            }
            State::Header => Err(GraphError::parse(self.last_line.max(1), "missing graph header")),
            State::Body(_) => Err(GraphError::parse(self.last_line, "missing closing brace")),
        }
    }
}

fn parse_header(line_no: usize, line: &str) -> Result<Graph> {
    let bad_header =
        || GraphError::parse(line_no, format!("expected `graph <name>{{`, got `{line}`"));
    let body = line.strip_suffix('{').ok_or_else(bad_header)?.trim();
    let (keyword, name) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
    let directed = match keyword {
        "digraph" => true,
        "graph" => false,
        _ => return Err(bad_header()),
    };
    Ok(Graph::new(name.trim(), directed))
}

fn add_statement(graph: &mut Graph, line_no: usize, line: &str) -> Result<()> {
    let statement = split_statement(line_no, line)?;
    let mut tokens = statement.tokens;
    if let Some(label) = statement.label {
        tokens.push(label);
    }

    match tokens.as_slice() {
        [name] => {
            graph.add_node(Node::named(*name));
        }
        [from, to] => {
            insert(graph, from, to, DEFAULT_WEIGHT, statement.highlighted);
        }
        [from, to, weight] => {
            let weight = parse_weight(line_no, weight)?;
            insert(graph, from, to, weight, statement.highlighted);
        }
        [] => return Err(GraphError::parse(line_no, "empty statement")),
        _ => {
            return Err(GraphError::parse(
                line_no,
                format!("expected at most three tokens, got {}", tokens.len()),
            ));
        }
    }
    Ok(())
}

fn insert(graph: &mut Graph, from: &str, to: &str, weight: Weight, highlighted: bool) {
    let added = graph.add_validated_edge(Some(Node::named(from)), Some(Node::named(to)), weight);
    if let Some(id) = added {
        graph.set_highlighted(id, highlighted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EdgeId;

    fn sample() -> Graph {
        let mut g = Graph::from_edges("Sample", false, [("0", "1", 3), ("1", "2", 1)]);
        g.add_node(Node::new(7));
        g.set_highlighted(EdgeId(1), true);
        g
    }

    #[test]
    fn weighted_export() {
        assert_eq!(
            sample().to_dot(),
            "graph Sample{\nN_0 -> N_1 [label=3];\nN_1 -> N_2 [label=1, color=red];\nN_7;\n}\n"
        );
    }

    #[test]
    fn unweighted_directed_export() {
        let g = Graph::from_edges("D", true, [("a", "b", 4)]);
        assert_eq!(
            render_dot(&g, &DotOptions { weighted: false }),
            "digraph D{\nN_a -> N_b;\n}\n"
        );
    }

    #[test]
    fn round_trip() {
        let original = sample();
        let parsed = parse_dot(&original.to_dot()).unwrap();
        assert_eq!(parsed.name(), "Sample");
        assert!(!parsed.is_directed());
        assert_eq!(
            parsed.node_names().collect::<Vec<_>>(),
            original.node_names().collect::<Vec<_>>()
        );
        for (id, edge) in original.edges() {
            let parsed_edge = parsed.edge(id);
            assert_eq!(parsed.edge_names(id), original.edge_names(id));
            assert_eq!(parsed_edge.weight(), edge.weight());
            assert_eq!(parsed_edge.is_highlighted(), edge.is_highlighted());
        }
    }

    #[test]
    fn token_counts() {
        let g = parse_dot("digraph T{\n\nN_a -> N_b;\nN_b N_c 5;\nN_d;\n}\n").unwrap();
        assert!(g.is_directed());
        assert_eq!(g.order(), 4);
        assert_eq!(g.edge(EdgeId(0)).weight(), 1);
        assert_eq!(g.edge(EdgeId(1)).weight(), 5);
    }

    #[test]
    fn reader_variant() {
        let text = sample().to_dot();
        let g = read_dot(text.as_bytes()).unwrap();
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let err = parse_dot("graph G{\nN_a -> N_b [label=x];\n}").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = parse_dot("graph G{\nN_a N_b N_c N_d;\n}").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = parse_dot("tree G{\n}").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = parse_dot("graph G{\nN_a -> N_b;\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }
}
