use std::{collections::BTreeMap, fmt::Display, iter::zip};

/// Label-wise counts and scores.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelMeasure {
    /// Number of correct predictions.
    pub num_correct: usize,
    /// Number of occurrences of the tag in the gold-standard data.
    pub num_observation: usize,
    /// Number of predictions of the tag.
    pub num_prediction: usize,
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

impl LabelMeasure {
    fn compute(&mut self) {
        self.precision = ratio(self.num_correct, self.num_prediction);
        self.recall = ratio(self.num_correct, self.num_observation);
        self.fmeasure = if self.precision + self.recall > 0.0 {
            self.precision * self.recall * 2.0 / (self.precision + self.recall)
        } else {
            0.0
        };
    }
}

fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 {
        0.0
    } else {
        n as f64 / d as f64
    }
}

/// Tagging accuracy against gold tags.
///
/// Feed sentences with [`Evaluation::accumulate`], then call
/// [`Evaluation::evaluate`]. Tokens the tagger left untagged count as
/// observations without a prediction.
#[derive(Debug, Default, Clone)]
pub struct Evaluation {
    tbl: BTreeMap<String, LabelMeasure>,
    item_total_correct: usize,
    item_total_num: usize,
    item_untagged: usize,
    inst_total_correct: usize,
    inst_total_num: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimation {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
    pub item_accuracy: f64,
    pub inst_accuracy: f64,
}

impl Evaluation {
    pub fn accumulate<R: AsRef<str>>(&mut self, reference: &[R], prediction: &[Option<&str>]) {
        let mut matched = 0;
        for (r, p) in zip(reference, prediction) {
            let r = r.as_ref();
            self.tbl.entry(r.to_string()).or_default().num_observation += 1;
            match p {
                Some(p) => {
                    self.tbl.entry(p.to_string()).or_default().num_prediction += 1;
                    if r == *p {
                        self.tbl.entry(r.to_string()).or_default().num_correct += 1;
                        matched += 1;
                    }
                }
                None => self.item_untagged += 1,
            }
        }
        self.item_total_correct += matched;
        self.item_total_num += reference.len();
        if matched == reference.len() {
            self.inst_total_correct += 1;
        }
        self.inst_total_num += 1;
    }

    pub fn label(&self, tag: &str) -> Option<&LabelMeasure> {
        self.tbl.get(tag)
    }

    /// Scores each tag and returns macro averages over the tags seen in
    /// the reference data.
    pub fn evaluate(&mut self) -> Estimation {
        let mut est = Estimation {
            precision: 0.0,
            recall: 0.0,
            fmeasure: 0.0,
            item_accuracy: ratio(self.item_total_correct, self.item_total_num),
            inst_accuracy: ratio(self.inst_total_correct, self.inst_total_num),
        };
        let mut num_labels = 0;
        for lev in self.tbl.values_mut() {
            lev.compute();
            if lev.num_observation == 0 {
                continue;
            }
            num_labels += 1;
            est.precision += lev.precision;
            est.recall += lev.recall;
            est.fmeasure += lev.fmeasure;
        }
        if num_labels > 0 {
            est.precision /= num_labels as f64;
            est.recall /= num_labels as f64;
            est.fmeasure /= num_labels as f64;
        }
        est
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Performance by label (#match, #model, #ref) (precision, recall, F1):")?;
        for (label, lev) in &self.tbl {
            if lev.num_observation == 0 {
                writeln!(f, "\t{}: ({}, {}, {}) (******, ******, ******)", label, lev.num_correct, lev.num_prediction, lev.num_observation)?;
            } else {
                writeln!(
                    f,
                    "\t{}: ({}, {}, {}) ({:.4}, {:.4}, {:.4})",
                    label, lev.num_correct, lev.num_prediction, lev.num_observation, lev.precision, lev.recall, lev.fmeasure
                )?;
            }
        }
        writeln!(f, "Untagged items: {}", self.item_untagged)?;
        writeln!(
            f,
            "Item accuracy: {}/{} => {:.4}",
            self.item_total_correct,
            self.item_total_num,
            ratio(self.item_total_correct, self.item_total_num)
        )?;
        write!(
            f,
            "Sentence accuracy: {}/{} => {:.4}",
            self.inst_total_correct,
            self.inst_total_num,
            ratio(self.inst_total_correct, self.inst_total_num)
        )
    }
}
