use tracing::{debug, trace};

use crate::record::Intimation;

use super::classify::{LineField, CLASSIFIERS};

/// Fields gathered since the last recipient line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub recipient_name: String,
    pub issuance_date: Option<String>,
    pub issuance_time: Option<String>,
    pub case_number: Option<String>,
    pub process_type: Option<String>,
    pub document_id: Option<String>,
    pub document_type: Option<String>,
}

impl Block {
    pub fn new(recipient_name: String) -> Self {
        Block {
            recipient_name,
            ..Block::default()
        }
    }

    /// Store `field` if its slot is still empty. First match wins per block.
    pub fn try_fill(&mut self, field: &LineField) -> bool {
        match field {
            LineField::IssuanceDate { date, time } if self.issuance_date.is_none() => {
                self.issuance_date = Some(date.clone());
                self.issuance_time = time.clone();
                true
            }
            LineField::CaseNumber { number, process_type } if self.case_number.is_none() => {
                self.case_number = Some(number.clone());
                self.process_type = process_type.clone();
                true
            }
            LineField::Document { kind, id } if self.document_id.is_none() => {
                self.document_type = Some(kind.clone());
                self.document_id = Some(id.clone());
                true
            }
            _ => false,
        }
    }

    /// `None` unless the block has a name, an issuance date and a case number.
    pub fn into_intimation(self) -> Option<Intimation> {
        if self.recipient_name.is_empty() {
            return None;
        }
        Some(Intimation {
            recipient_name: self.recipient_name,
            issuance_date: self.issuance_date?,
            issuance_time: self.issuance_time,
            case_number: self.case_number?,
            process_type: self.process_type,
            document_id: self.document_id,
            document_type: self.document_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    AwaitingName,
    Accumulating(Block),
}

/// Line-driven assembler: a recipient line closes the previous block and
/// opens a new one; every other recognised line fills the open block.
#[derive(Debug)]
pub struct BlockParser {
    state: State,
    out: Vec<Intimation>,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser {
    pub fn new() -> Self {
        BlockParser {
            state: State::AwaitingName,
            out: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn feed(&mut self, line: &str) {
        for classifier in CLASSIFIERS {
            let Some(field) = (classifier.classify)(line) else {
                continue;
            };

            if let LineField::Name(name) = field {
                let previous = std::mem::replace(&mut self.state, State::Accumulating(Block::new(name)));
                if let State::Accumulating(block) = previous {
                    self.flush(block);
                }
                return;
            }

            match &mut self.state {
                State::AwaitingName => return,
                State::Accumulating(block) => {
                    if block.try_fill(&field) {
                        trace!(classifier = classifier.name, line, "filled");
                        return;
                    }
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Intimation> {
        if let State::Accumulating(block) = std::mem::replace(&mut self.state, State::AwaitingName) {
            self.flush(block);
        }
        self.out
    }

    fn flush(&mut self, block: Block) {
        let name = block.recipient_name.clone();
        let Some(intimation) = block.into_intimation() else {
            trace!(recipient = %name, "dropping incomplete block");
            return;
        };
        if self.out.iter().any(|seen| seen.same_identity(&intimation)) {
            debug!(
                recipient = %intimation.recipient_name,
                case = %intimation.case_number,
                "skipping repeated block"
            );
            return;
        }
        self.out.push(intimation);
    }
}

/// Run every non-blank, trimmed line of `text` through a fresh parser.
pub fn assemble_blocks(text: &str) -> Vec<Intimation> {
    let mut parser = BlockParser::new();
    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        parser.feed(line);
    }
    parser.finish()
}
