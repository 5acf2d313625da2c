use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{
	Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions, Value,
};
use tantivy::tokenizer::{
	LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer, TokenStream,
};
use tantivy::{DocAddress, Index, IndexReader, IndexWriter, TantivyDocument, Term, doc};
use tracing::{debug, info};

use super::{DocId, DocMetadata, IndexError, IndexStats, SearchHit, SearchIndex};
use crate::corpus::Document;

const TOKENIZER: &str = "isearch_text";
const PATH_FIELD: &str = "path";
const BODY_FIELD: &str = "body";

#[derive(Clone, Copy)]
struct Fields {
	path: Field,
	body: Field,
}

/// BM25-ranked inverted index persisted in a directory.
pub struct TantivyIndex {
	reader: IndexReader,
	fields: Fields,
	analyzer: TextAnalyzer,
}

impl TantivyIndex {
	/// Open the index in `dir`, building it from `documents` when none exists yet.
	pub fn open_or_build(
		dir: &Path,
		documents: &[Document],
		writer_memory: usize,
	) -> Result<Self, IndexError> {
		if dir.join("meta.json").exists() {
			info!(dir = %dir.display(), "opening existing index");
			let mut index = Index::open_in_dir(dir)?;
			register_tokenizer(&mut index);
			return Self::from_index(index);
		}

		fs::create_dir_all(dir)?;
		let mut index = Index::create_in_dir(dir, build_schema())?;
		register_tokenizer(&mut index);
		let fields = fields_from_schema(&index.schema())?;

		let mut writer: IndexWriter = index.writer_with_num_threads(1, writer_memory)?;
		for document in documents {
			let bytes = fs::read(&document.path).map_err(|source| IndexError::Document {
				path: document.path.clone(),
				source,
			})?;
			writer.add_document(doc!(
				fields.path => document.path.to_string_lossy().into_owned(),
				fields.body => String::from_utf8_lossy(&bytes).into_owned(),
			))?;
		}
		writer.commit()?;
		info!(dir = %dir.display(), documents = documents.len(), "built index");

		Self::from_index(index)
	}

	/// Remove a persisted index so the next open rebuilds it.
	pub fn reset(dir: &Path) -> Result<(), IndexError> {
		if dir.exists() {
			fs::remove_dir_all(dir)?;
		}
		Ok(())
	}

	fn from_index(index: Index) -> Result<Self, IndexError> {
		let fields = fields_from_schema(&index.schema())?;
		let reader = index.reader()?;
		Ok(Self {
			reader,
			fields,
			analyzer: text_analyzer(),
		})
	}

	/// Split `query` with the body analyzer; any one term is enough to match.
	fn term_clauses(&self, query: &str) -> Vec<(Occur, Box<dyn Query>)> {
		let mut analyzer = self.analyzer.clone();
		let mut stream = analyzer.token_stream(query);
		let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
		while stream.advance() {
			let term = Term::from_field_text(self.fields.body, &stream.token().text);
			clauses.push((
				Occur::Should,
				Box::new(TermQuery::new(term, IndexRecordOption::WithFreqs)),
			));
		}
		clauses
	}

	/// Stored paths of every live document, in index order.
	pub fn paths(&self) -> Result<Vec<String>, IndexError> {
		let searcher = self.reader.searcher();
		let mut paths = Vec::new();
		for (segment, reader) in searcher.segment_readers().iter().enumerate() {
			for doc in reader.doc_ids_alive() {
				let id = DocId {
					segment: segment as u32,
					doc,
				};
				paths.push(self.metadata(id)?.path);
			}
		}
		Ok(paths)
	}
}

impl SearchIndex for TantivyIndex {
	fn search(&self, query: &str, max: usize) -> Result<Vec<SearchHit>, IndexError> {
		if max == 0 {
			return Ok(Vec::new());
		}
		let clauses = self.term_clauses(query);
		if clauses.is_empty() {
			return Ok(Vec::new());
		}
		debug!(query, terms = clauses.len(), "searching");

		let searcher = self.reader.searcher();
		let top = searcher.search(&BooleanQuery::new(clauses), &TopDocs::with_limit(max))?;
		Ok(top
			.into_iter()
			.map(|(score, address)| SearchHit {
				doc: DocId {
					segment: address.segment_ord,
					doc: address.doc_id,
				},
				score,
			})
			.collect())
	}

	fn metadata(&self, doc: DocId) -> Result<DocMetadata, IndexError> {
		let searcher = self.reader.searcher();
		let stored: TantivyDocument = searcher.doc(DocAddress::new(doc.segment, doc.doc))?;
		let path = stored
			.get_first(self.fields.path)
			.and_then(|value| value.as_str())
			.ok_or(IndexError::MissingPath(doc))?;
		Ok(DocMetadata {
			path: path.to_string(),
		})
	}

	fn stats(&self) -> Result<IndexStats, IndexError> {
		let searcher = self.reader.searcher();
		let documents = searcher.num_docs();
		let mut total_terms = 0u64;
		let mut unique = HashSet::new();
		for segment in searcher.segment_readers() {
			let inverted = segment.inverted_index(self.fields.body)?;
			total_terms += inverted.total_num_tokens();
			let mut terms = inverted.terms().stream()?;
			while terms.advance() {
				unique.insert(terms.key().to_vec());
			}
		}
		let average_length = if documents == 0 {
			0.0
		} else {
			total_terms as f64 / documents as f64
		};
		Ok(IndexStats {
			documents,
			total_terms,
			unique_terms: unique.len() as u64,
			average_length,
		})
	}
}

fn build_schema() -> Schema {
	let mut builder = Schema::builder();
	let body = TextOptions::default().set_indexing_options(
		TextFieldIndexing::default()
			.set_tokenizer(TOKENIZER)
			.set_index_option(IndexRecordOption::WithFreqsAndPositions),
	);
	builder.add_text_field(PATH_FIELD, STRING | STORED);
	builder.add_text_field(BODY_FIELD, body);
	builder.build()
}

fn fields_from_schema(schema: &Schema) -> Result<Fields, IndexError> {
	Ok(Fields {
		path: schema
			.get_field(PATH_FIELD)
			.map_err(|_| IndexError::MissingField(PATH_FIELD))?,
		body: schema
			.get_field(BODY_FIELD)
			.map_err(|_| IndexError::MissingField(BODY_FIELD))?,
	})
}

fn text_analyzer() -> TextAnalyzer {
	TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(LowerCaser)
		.filter(RemoveLongFilter::limit(40))
		.build()
}

fn register_tokenizer(index: &mut Index) {
	index.tokenizers().register(TOKENIZER, text_analyzer());
}
