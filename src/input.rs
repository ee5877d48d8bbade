use std::io::BufRead;

use anyhow::{bail, Context, Result};

use crate::graph::Time;
use crate::grid::Grid;

/// What a query should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TimeOnly,
    TimeAndRoute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub dep: String,
    pub dest: String,
    pub time: Time,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub dep: String,
    pub dest: String,
    pub mode: Mode,
}

/// One fully parsed problem: the map plus the flight and query lists.
#[derive(Debug)]
pub struct Problem {
    pub grid: Grid,
    pub flights: Vec<Flight>,
    pub requests: Vec<Request>,
}

/// Parse a whole problem. Layout, in order: `W H`, then H raw map rows
/// (read verbatim, blanks are significant), then `K` and K lines of
/// `dep dest time`, then `Q` and Q lines of `dep dest mode`.
pub fn read_problem<R: BufRead>(reader: R) -> Result<Problem> {
    let mut lines = reader.lines();
    let mut next_line = move || -> Result<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => bail!("unexpected end of input"),
        }
    };

    let header = next_line().context("reading map dimensions")?;
    let mut parts = header.split_whitespace();
    let width: usize = parts
        .next()
        .context("missing map width")?
        .parse()
        .context("parsing map width")?;
    let height: usize = parts
        .next()
        .context("missing map height")?
        .parse()
        .context("parsing map height")?;

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        rows.push(next_line().with_context(|| format!("reading map row {i}"))?);
    }
    let grid = Grid::new(width, height, &rows);

    let flight_count: usize = next_line()
        .context("reading flight count")?
        .trim()
        .parse()
        .context("parsing flight count")?;
    let mut flights = Vec::with_capacity(flight_count);
    for i in 0..flight_count {
        let line = next_line().with_context(|| format!("reading flight {i}"))?;
        let mut fields = line.split_whitespace();
        let (Some(dep), Some(dest), Some(time)) = (fields.next(), fields.next(), fields.next())
        else {
            bail!("flight {i} is not of the form `dep dest time`: {line:?}");
        };
        flights.push(Flight {
            dep: dep.to_string(),
            dest: dest.to_string(),
            time: time.parse().with_context(|| format!("parsing flight {i} time"))?,
        });
    }

    let request_count: usize = next_line()
        .context("reading query count")?
        .trim()
        .parse()
        .context("parsing query count")?;
    let mut requests = Vec::with_capacity(request_count);
    for i in 0..request_count {
        let line = next_line().with_context(|| format!("reading query {i}"))?;
        let mut fields = line.split_whitespace();
        let (Some(dep), Some(dest), Some(mode)) = (fields.next(), fields.next(), fields.next())
        else {
            bail!("query {i} is not of the form `dep dest mode`: {line:?}");
        };
        let mode = match mode {
            "0" => Mode::TimeOnly,
            "1" => Mode::TimeAndRoute,
            other => bail!("query {i} has unknown mode {other:?}, expected 0 or 1"),
        };
        requests.push(Request {
            dep: dep.to_string(),
            dest: dest.to_string(),
            mode,
        });
    }

    Ok(Problem { grid, flights, requests })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::route;
    use crate::graph::TransitGraph;

    const SAMPLE: &str = "\
10 2
*#*#*.....
A.B.C.....
1
C A 1
3
A C 1
C A 0
A B 0
";

    #[test]
    fn parses_the_sample() {
        let problem = read_problem(SAMPLE.as_bytes()).unwrap();
        assert_eq!(problem.grid.width(), 10);
        assert_eq!(problem.grid.height(), 2);
        assert_eq!(
            problem.flights,
            vec![Flight { dep: "C".into(), dest: "A".into(), time: 1 }]
        );
        assert_eq!(problem.requests.len(), 3);
        assert_eq!(problem.requests[0].mode, Mode::TimeAndRoute);
        assert_eq!(problem.requests[1].mode, Mode::TimeOnly);
    }

    #[test]
    fn end_to_end_sample_queries() {
        let problem = read_problem(SAMPLE.as_bytes()).unwrap();
        let mut graph = TransitGraph::from_grid(&problem.grid).unwrap();
        for flight in &problem.flights {
            graph.add_flight(&flight.dep, &flight.dest, flight.time).unwrap();
        }
        drop(problem.grid);

        let a = graph.station_id("A").unwrap();
        let b = graph.station_id("B").unwrap();
        let c = graph.station_id("C").unwrap();

        let r = route(&graph, a, c, true);
        assert_eq!(r.time, 4);
        assert_eq!(r.via, vec!["B".to_string()]);

        assert_eq!(route(&graph, c, a, false).time, 1);
        assert_eq!(route(&graph, a, b, false).time, 2);
    }

    #[test]
    fn truncated_input_is_an_error() {
        assert!(read_problem("3 2\n*#*\n".as_bytes()).is_err());
        assert!(read_problem("".as_bytes()).is_err());
    }

    #[test]
    fn bad_mode_is_an_error() {
        let text = "3 1\n*#*\n0\n1\nA B 2\n";
        let err = read_problem(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("mode"));
    }

    #[test]
    fn problem_is_debug_printable() {
        let problem = read_problem(SAMPLE.as_bytes()).unwrap();
        let dump = format!("{problem:?}");
        assert!(dump.contains("Flight"));
        assert!(dump.contains("TimeAndRoute"));
    }

    #[test]
    fn zero_counts_are_fine() {
        let problem = read_problem("3 1\n*#*\n0\n0\n".as_bytes()).unwrap();
        assert!(problem.flights.is_empty());
        assert!(problem.requests.is_empty());
    }
}
