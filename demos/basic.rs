use corpus_vectorizer::{Corpus, CorpusVectorizer};

fn main() {
    // build corpus
    let corpus = Corpus::from_documents([
        "кот сидит на окне",
        "кот спит",
        "собака лает на кота",
    ]);

    // one-shot build: vocabulary + TF/DF/IDF/TF-IDF
    let vectorizer: CorpusVectorizer = CorpusVectorizer::build(corpus);
    println!(
        "{} documents, {} terms",
        vectorizer.doc_count(),
        vectorizer.vocab_size()
    );
    println!("idf: {:?}", vectorizer.idf());

    // binary bag-of-words against the fixed vocabulary
    let query = vectorizer.bag_of_words("кот спит на диване");
    println!("bow vector: {:?}", query.vector);
    println!("matched: {:?}", query.matched_terms);

    // latent semantic projection
    let lsa = vectorizer.lsa(2).expect("rank 2 is valid for 3 documents");
    println!("projection:\n{:?}", lsa.projection);
    println!("variance explained: {:.3}", lsa.variance_explained);
}
