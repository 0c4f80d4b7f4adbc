//! Line-oriented static file format for virtual network requests.
//!
//! The format is a fixed-order plain-text record: node and edge counts first, then one
//! section per attribute column introduced by its marker line. It is the exchange format
//! between request generators and the external embedding tooling.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::str::FromStr;

use log::{debug, info};

use crate::error::FormatError;
use crate::virtual_network::VirtualNetwork;

struct SectionReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> SectionReader<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<String, FormatError> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(FormatError::UnexpectedEof),
        }
    }

    fn expect_marker(&mut self, marker: &'static str) -> Result<(), FormatError> {
        let line = self.next_line()?;
        if line.trim() != marker {
            return Err(FormatError::MissingSection {
                line: self.line,
                expected: marker,
            });
        }
        Ok(())
    }

    fn parse<T: FromStr>(&mut self) -> Result<T, FormatError> {
        let line = self.next_line()?;
        let token = line.trim();
        token.parse().map_err(|_| FormatError::InvalidValue {
            line: self.line,
            value: token.to_string(),
        })
    }

    fn parse_section<T: FromStr>(&mut self, marker: &'static str, count: usize) -> Result<Vec<T>, FormatError> {
        self.expect_marker(marker)?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.parse()?);
        }
        Ok(values)
    }
}

impl VirtualNetwork {
    /// Writes the request to the given path, creating or overwriting the file.
    ///
    /// The arrival time and the backup flag are not part of the format and are not
    /// written.
    pub fn save_to_file(&self, path: &str) -> Result<(), std::io::Error> {
        let mut file = BufWriter::new(File::create(path)?);

        writeln!(file, "{}", self.get_node_count())?;
        writeln!(file, "{}", self.get_edge_count())?;

        writeln!(file, "NODES")?;
        for node in self.get_nodes() {
            writeln!(file, "{}", node.name)?;
        }

        writeln!(file, "NODESCPU")?;
        for node in self.get_nodes() {
            writeln!(file, "{}", node.cpu)?;
        }

        writeln!(file, "NODESSEC")?;
        for node in self.get_nodes() {
            writeln!(file, "{}", node.security)?;
        }

        writeln!(file, "EDGES")?;
        for edge in self.get_edges() {
            writeln!(file, "{} {}", edge.from, edge.to)?;
        }

        writeln!(file, "EDGESBW")?;
        for edge in self.get_edges() {
            writeln!(file, "{}", edge.bandwidth)?;
        }

        writeln!(file, "EDGESSEC")?;
        for edge in self.get_edges() {
            writeln!(file, "{}", edge.security)?;
        }

        writeln!(file, "NCLOUDS")?;
        writeln!(file, "{}", self.get_clouds_security().len())?;

        writeln!(file, "CLOUDSSEC")?;
        for level in self.get_clouds_security() {
            writeln!(file, "{}", level)?;
        }

        writeln!(file, "BACKUPLOCALIZATION")?;
        for location in self.get_backups_localization() {
            writeln!(file, "{}", location)?;
        }

        writeln!(file, "DURATION")?;
        writeln!(file, "{}", self.duration())?;

        file.flush()?;
        debug!("saved virtual network request to {}", path);
        Ok(())
    }

    /// Reads a request from a file in the static format.
    ///
    /// The format records neither the arrival time nor the backup flag: the arrival is
    /// left at zero and the backup flag is inferred from the presence of backup
    /// localization entries.
    pub fn from_file(path: &str) -> Result<Self, FormatError> {
        let mut reader = SectionReader::new(BufReader::new(File::open(path)?));

        let node_count: usize = reader.parse()?;
        let edge_count: usize = reader.parse()?;

        reader.expect_marker("NODES")?;
        let mut names = Vec::with_capacity(node_count);
        for _ in 0..node_count {
            names.push(reader.next_line()?.trim().to_string());
        }
        let cpus: Vec<f64> = reader.parse_section("NODESCPU", node_count)?;
        let securities: Vec<f64> = reader.parse_section("NODESSEC", node_count)?;

        reader.expect_marker("EDGES")?;
        let known: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut endpoints = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            let line = reader.next_line()?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 2 {
                return Err(FormatError::InvalidValue {
                    line: reader.line,
                    value: line.trim().to_string(),
                });
            }
            for token in &tokens {
                if !known.contains(token) {
                    return Err(FormatError::UnknownEndpoint {
                        line: reader.line,
                        name: token.to_string(),
                    });
                }
            }
            endpoints.push((tokens[0].to_string(), tokens[1].to_string()));
        }
        let bandwidths: Vec<f64> = reader.parse_section("EDGESBW", edge_count)?;
        let edge_securities: Vec<f64> = reader.parse_section("EDGESSEC", edge_count)?;

        reader.expect_marker("NCLOUDS")?;
        let cloud_count: usize = reader.parse()?;
        let clouds: Vec<f64> = reader.parse_section("CLOUDSSEC", cloud_count)?;

        // Variable-sized section, entries run until the DURATION marker.
        reader.expect_marker("BACKUPLOCALIZATION")?;
        let mut backup = Vec::new();
        let duration: u64 = loop {
            let line = reader.next_line()?;
            let token = line.trim();
            if token == "DURATION" {
                break reader.parse()?;
            }
            backup.push(token.parse().map_err(|_| FormatError::InvalidValue {
                line: reader.line,
                value: token.to_string(),
            })?);
        };

        let mut network = VirtualNetwork::new(duration);
        for i in 0..node_count {
            network.add_node(&names[i], cpus[i], securities[i]);
        }
        for (i, (from, to)) in endpoints.iter().enumerate() {
            network.add_edge(from, to, bandwidths[i], edge_securities[i]);
        }
        for level in clouds {
            network.add_cloud_security(level);
        }
        network.set_want_backup(!backup.is_empty());
        network.set_backup_localization(backup);

        info!(
            "read virtual network request with {} nodes and {} edges from {}",
            network.get_node_count(),
            network.get_edge_count(),
            path
        );
        Ok(network)
    }
}
