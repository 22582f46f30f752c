//! Interface de terminal do stumble — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de descoberta e `console` para
//! estilização com cores. O [`DiscoverProgress`] acompanha visualmente as
//! tentativas de uma descoberta no terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::Candidate;
use crate::discover::{FetchOutcome, State};
use crate::exclusions::ExclusionSet;

/// Indicador visual de progresso para uma descoberta no terminal.
///
/// Exibe um spinner animado enquanto as tentativas estão em andamento e
/// mensagens coloridas para aceito (verde), esgotado (amarelo) e falha de
/// transporte (vermelho).
pub struct DiscoverProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para o candidato aceito.
    green: Style,
    // Estilo vermelho para falhas de transporte.
    red: Style,
    // Estilo amarelo para busca esgotada.
    yellow: Style,
}

impl DiscoverProgress {
    /// Inicia o spinner e retorna a instância de progresso.
    pub fn start() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("{}", State::Idle));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Atualiza a mensagem do spinner para refletir o estado atual do laço.
    pub fn update_state(&self, state: State) {
        self.pb.set_message(format!("{state}"));
    }

    /// Finaliza o spinner e exibe o resultado da descoberta.
    ///
    /// A causa de uma falha de transporte só aparece com `verbose`; a
    /// mensagem visível é sempre o aviso genérico.
    pub fn complete(&self, outcome: &FetchOutcome, verbose: bool) {
        self.pb.finish_and_clear();
        match outcome {
            FetchOutcome::Accepted(candidate) => {
                print_candidate(candidate, &self.green);
            }
            FetchOutcome::Exhausted => {
                println!(
                    "  {} No more cats match your criteria!",
                    self.yellow.apply_to("∅")
                );
            }
            FetchOutcome::TransportError(err) => {
                println!("  {} Failed to fetch cat", self.red.apply_to("✗"));
                if verbose {
                    eprintln!("    cause: {err}");
                }
            }
        }
    }
}

// Cartão do candidato aceito: nome, etiquetas (origem, expectativa de vida,
// raça) e a URL da imagem.
fn print_candidate(candidate: &Candidate, green: &Style) {
    let tag = Style::new().cyan();
    println!();
    println!("  {}", green.apply_to(&candidate.name));
    println!(
        "  {}  {}  {}",
        tag.apply_to(format!("[{}]", candidate.origin)),
        tag.apply_to(format!("[{} yrs]", candidate.life_span_label)),
        tag.apply_to(format!("[{}]", candidate.name)),
    );
    println!("  {}", candidate.image_url);
    println!("  {}", Style::new().dim().apply_to(format!("id {}", candidate.id)));
    println!();
}

/// Imprime a lista de banimentos na ordem de inserção.
pub fn print_ban_list(exclusions: &ExclusionSet) {
    let yellow = Style::new().yellow();
    println!("{}", yellow.apply_to("─── Ban List ───"));
    if exclusions.is_empty() {
        println!("  {}", Style::new().dim().apply_to("(empty)"));
        return;
    }
    for value in exclusions.iter() {
        println!("  {} {value}", yellow.apply_to("⊘"));
    }
}
