use std::fs;

use huffman_rust::{accumulate_frequencies, build_code, encode, properties::Properties, CodeTable, CodeTableStore, Decoder, FileStore, FrequencyTable, TableFormat, Tokenizer};
use rstest::rstest;

const REVIEWS: [&str; 3] = [
    "A wonderful film: the cast is superb.",
    "Terrible plot, but the music was great!",
    "I would watch it again; the ending is a surprise.",
];

fn train(tokenizer: Tokenizer) -> (FrequencyTable<String>, CodeTable<String>) {
    let mut freq = FrequencyTable::new();
    for review in REVIEWS {
        accumulate_frequencies(&mut freq, tokenizer.tokenize(review));
    }
    let table = build_code(&freq).unwrap();
    (freq, table)
}

#[rstest]
#[case(Tokenizer::Chars, TableFormat::Text)]
#[case(Tokenizer::Chars, TableFormat::Binary)]
#[case(Tokenizer::Words, TableFormat::Text)]
#[case(Tokenizer::Words, TableFormat::Binary)]
fn test_train_store_and_serve(#[case] tokenizer: Tokenizer, #[case] format: TableFormat) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("model.data"), format);

    let (_, table) = train(tokenizer);
    store.save(&table).unwrap();

    let served: CodeTable<String> = store.load().unwrap();
    assert_eq!(served, table);

    let decoder = Decoder::new(&served);
    for review in REVIEWS {
        let bits = encode(&tokenizer.tokenize(review), &served).unwrap();
        assert_eq!(decoder.decode_with_separator(&bits, tokenizer.separator()).unwrap(), review);
    }
}

#[test]
fn test_saved_text_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    let first = FileStore::new(dir.path().join("first.data"), TableFormat::Text);
    let second = FileStore::new(dir.path().join("second.data"), TableFormat::Text);

    first.save(&train(Tokenizer::Chars).1).unwrap();
    second.save(&train(Tokenizer::Chars).1).unwrap();

    assert_eq!(fs::read(first.path()).unwrap(), fs::read(second.path()).unwrap());
}

#[test]
fn test_store_from_properties() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("huffman.properties");
    let table_path = dir.path().join("words.bin");
    fs::write(&config, format!("tokenizer=words\nformat=binary\ntable={}\n", table_path.display())).unwrap();

    let props = Properties::load(&config).unwrap();
    let store = FileStore::new(props.table.as_ref().unwrap(), props.format);

    let (freq, table) = train(props.tokenizer);
    store.save(&table).unwrap();
    let loaded: CodeTable<String> = store.load().unwrap();

    assert_eq!(store.format(), TableFormat::Binary);
    assert_eq!(loaded.weighted_length(&freq), table.weighted_length(&freq));
}
