use wordfreq::{
    FrequencyTable, IdentityStemmer, Language, Pipeline, PipelineConfig, RankingOptions,
    StopWordSet,
};

const PASSAGE: &str = "\
Алексей Абрамович Негров был богатый помещик, отставной генерал.
Он жил в своём имении и редко выезжал в губернский город.
Дмитрий Яковлевич Круциферский, молодой человек без средств, приехал к нему учителем.
Учитель был очень скромный человек; в доме учителя никто не замечал.
Любонька читала книгу, которую привёз учитель, и книги эти меняли её жизнь.
«Кто виноват?» — спрашивал доктор Крупов, и никто не знал ответа.
";

fn main() -> anyhow::Result<()> {
    println!("=== wordfreq Basic Usage Example ===\n");

    // Example 1: Full pipeline with the Russian defaults
    println!("--- Example 1: Default Russian pipeline ---");
    let config = PipelineConfig::new(Language::Russian).with_ranking(RankingOptions {
        top_n: 5,
        rare_n: 5,
        min_count: 2,
    });
    let pipeline = Pipeline::new(config)?;
    let report = pipeline.analyze_text(PASSAGE);
    println!("{}", report);

    // Example 2: Cleaning a single line
    println!("\n--- Example 2: Cleaning one line ---");
    let tokens = pipeline
        .tokenizer()
        .clean("Он был, конечно, очень скромный человек.");
    println!("{:?}", tokens);

    // Example 3: Custom stop words, no stemming
    println!("\n--- Example 3: Custom stop words, no stemming ---");
    let config = PipelineConfig::new(Language::Russian)
        .with_stop_words(StopWordSet::from_list(&["был", "без", "его"]))
        .with_stemmer(IdentityStemmer)
        .with_threads(1);
    let pipeline = Pipeline::new(config)?;
    let report = pipeline.analyze_text(PASSAGE);
    println!(
        "{} words, {} unique; stemming removed {}",
        report.words.total, report.words.unique, report.vocabulary_reduction
    );

    // Example 4: Frequency table on its own
    println!("\n--- Example 4: Frequency table ---");
    let table = FrequencyTable::from_tokens(["учитель", "книга", "учитель", "город"]);
    for entry in table.top(3) {
        println!("{:<10}", entry);
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
