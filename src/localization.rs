use crate::shapes::enums::LanguageEnum;
use once_cell::sync::OnceCell;
use std::sync::RwLock;

#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    // report
    pub draw_complete: &'static str,
    pub total: &'static str,
    pub team: &'static str,
    pub players_count: &'static str,
    pub mean_age: &'static str,
    pub years: &'static str,
    pub positions: &'static str,
    pub players: &'static str,
    // positions
    pub goalkeeper: &'static str,
    pub centre_back: &'static str,
    pub full_back: &'static str,
    pub midfielder: &'static str,
    pub forward: &'static str,
    pub fixo: &'static str,
    pub winger: &'static str,
    pub pivot: &'static str,
    // balance modes
    pub random: &'static str,
    pub balanced: &'static str,
    // screens
    pub roster: &'static str,
    pub total_registered_players: &'static str,
    pub name: &'static str,
    pub age: &'static str,
    pub position: &'static str,
    pub no_players_yet: &'static str,
    pub new_player: &'static str,
    pub edit_player: &'static str,
    pub remove_player: &'static str,
    pub confirm_remove_player: &'static str,
    pub open_roster_file: &'static str,
    pub draw_setup: &'static str,
    pub draw_teams: &'static str,
    pub draw_result: &'static str,
    pub team_count: &'static str,
    pub team_labels: &'static str,
    pub draw_mode: &'static str,
    pub seed: &'static str,
    pub redraw: &'static str,
    pub navigate: &'static str,
    pub scroll: &'static str,
    pub toggle: &'static str,
    pub enter: &'static str,
    pub confirm: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub info: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    // messages
    pub operation_successful: &'static str,
    pub player_removed: &'static str,
    pub could_not_load_players: &'static str,
    pub could_not_save_player: &'static str,
    pub could_not_remove_player: &'static str,
    pub could_not_open_roster_file: &'static str,
    pub could_not_save_settings: &'static str,
    pub could_not_draw_teams: &'static str,
    pub could_not_recognize_home_directory: &'static str,
    pub could_not_create_app_directory: &'static str,
    pub value_defaulted: &'static str,
}

pub static EN: Labels = Labels {
    app_title: "⚽ pelada",
    draw_complete: "DRAW COMPLETE!",
    total: "Total",
    team: "Team",
    players_count: "players",
    mean_age: "Mean age",
    years: "years",
    positions: "Positions",
    players: "Players",
    goalkeeper: "Goalkeeper",
    centre_back: "Centre-back",
    full_back: "Full-back",
    midfielder: "Midfielder",
    forward: "Forward",
    fixo: "Fixo",
    winger: "Winger",
    pivot: "Pivot",
    random: "random",
    balanced: "balanced",
    roster: "Roster",
    total_registered_players: "Total registered players",
    name: "Name",
    age: "Age",
    position: "Position",
    no_players_yet: "no players yet, press N to register one",
    new_player: "New player",
    edit_player: "Edit player",
    remove_player: "Remove player",
    confirm_remove_player: "press Enter to remove the selected player, any other key to cancel",
    open_roster_file: "Open roster file",
    draw_setup: "Draw setup",
    draw_teams: "Draw teams",
    draw_result: "Draw result",
    team_count: "How many teams",
    team_labels: "Bib colors (comma separated)",
    draw_mode: "Draw mode",
    seed: "Seed (optional)",
    redraw: "Draw again",
    navigate: "Navigate",
    scroll: "Scroll",
    toggle: "Toggle",
    enter: "Enter",
    confirm: "Confirm",
    back: "Back",
    quit: "Quit",
    info: "Info",
    error: "Error",
    warning: "Warning",
    operation_successful: "operation successful",
    player_removed: "player removed",
    could_not_load_players: "could not load players",
    could_not_save_player: "could not save player",
    could_not_remove_player: "could not remove player",
    could_not_open_roster_file: "could not open the roster file",
    could_not_save_settings: "could not save settings",
    could_not_draw_teams: "could not draw teams",
    could_not_recognize_home_directory: "could not recognize the home directory",
    could_not_create_app_directory: "could not create the app directory",
    value_defaulted: "invalid value replaced with the default",
};

pub static PT: Labels = Labels {
    app_title: "⚽ pelada",
    draw_complete: "SORTEIO REALIZADO!",
    total: "Total",
    team: "Time",
    players_count: "jogadores",
    mean_age: "Média idade",
    years: "anos",
    positions: "Posições",
    players: "Jogadores",
    goalkeeper: "Goleiro",
    centre_back: "Zagueiro",
    full_back: "Lateral",
    midfielder: "Meia",
    forward: "Atacante",
    fixo: "Fixo",
    winger: "Ala",
    pivot: "Pivô",
    random: "aleatório",
    balanced: "balanceado",
    roster: "Cadastro",
    total_registered_players: "Total de jogadores cadastrados",
    name: "Nome",
    age: "Idade",
    position: "Posição",
    no_players_yet: "nenhum jogador cadastrado, pressione N para adicionar",
    new_player: "Novo jogador",
    edit_player: "Editar jogador",
    remove_player: "Remover jogador",
    confirm_remove_player:
        "pressione Enter para remover o jogador selecionado, qualquer outra tecla para cancelar",
    open_roster_file: "Abrir planilha",
    draw_setup: "Configuração do sorteio",
    draw_teams: "Sortear times",
    draw_result: "Resultado do sorteio",
    team_count: "Quantos times",
    team_labels: "Cores dos coletes (separadas por vírgula)",
    draw_mode: "Modo de sorteio",
    seed: "Semente (opcional)",
    redraw: "Sortear de novo",
    navigate: "Navegar",
    scroll: "Rolar",
    toggle: "Alternar",
    enter: "Enter",
    confirm: "Confirmar",
    back: "Voltar",
    quit: "Sair",
    info: "Info",
    error: "Erro",
    warning: "Aviso",
    operation_successful: "operação realizada com sucesso",
    player_removed: "jogador removido",
    could_not_load_players: "não foi possível carregar os jogadores",
    could_not_save_player: "não foi possível salvar o jogador",
    could_not_remove_player: "não foi possível remover o jogador",
    could_not_open_roster_file: "não foi possível abrir a planilha",
    could_not_save_settings: "não foi possível salvar as configurações",
    could_not_draw_teams: "não foi possível sortear os times",
    could_not_recognize_home_directory: "não foi possível identificar o diretório do usuário",
    could_not_create_app_directory: "não foi possível criar o diretório da aplicação",
    value_defaulted: "valor inválido substituído pelo padrão",
};

static CURRENT_LANGUAGE: OnceCell<RwLock<LanguageEnum>> = OnceCell::new();

pub fn labels_for(language: LanguageEnum) -> &'static Labels {
    match language {
        LanguageEnum::En => &EN,
        LanguageEnum::Pt => &PT,
    }
}

/// Should be called once at startup; later calls only switch the language.
pub fn set_language(language: LanguageEnum) {
    let lock = CURRENT_LANGUAGE.get_or_init(|| RwLock::new(language));
    if let Ok(mut current) = lock.write() {
        *current = language;
    }
}

pub fn current_labels() -> &'static Labels {
    let language = CURRENT_LANGUAGE
        .get()
        .and_then(|lock| lock.read().ok().map(|l| *l))
        .unwrap_or_default();
    labels_for(language)
}
