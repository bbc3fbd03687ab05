//! Polish messages (origin language, complete).

pub static MESSAGES: &[(&str, &str)] = &[
    // --- Site ---
    ("site.name", "FizLab"),
    ("seo.default_description", "Interaktywne lekcje fizyki: elektryczność, kosmos, mikroświat i percepcja."),
    // --- Route paths ---
    ("route.home", "/"),
    ("route.electricity", "/elektrycznosc-i-magnetyzm"),
    ("route.earth_space", "/ziemia-i-kosmos"),
    ("route.microworld", "/mikroswiat"),
    ("route.perception", "/postrzeganie"),
    ("route.quiz", "/quiz"),
    ("route.facts", "/ciekawostki"),
    ("route.scale", "/skala-wszechswiata"),
    // --- Page titles & descriptions ---
    ("seo.home.title", "FizLab — interaktywne lekcje fizyki"),
    ("seo.home.description", "Ucz się fizyki przez zabawę: symulacje, quizy i ciekawostki."),
    ("seo.electricity.title", "Elektryczność i magnetyzm"),
    ("seo.electricity.description", "Prąd elektryczny, dryf elektronów i prąd przemienny w interaktywnych symulacjach."),
    ("seo.earth_space.title", "Ziemia i kosmos"),
    ("seo.earth_space.description", "Ruch planet i wahadło — mechanika na co dzień i w układzie słonecznym."),
    ("seo.microworld.title", "Mikroświat"),
    ("seo.microworld.description", "Budowa atomu, zderzenia cząstek i podwójna helisa DNA."),
    ("seo.perception.title", "Postrzeganie"),
    ("seo.perception.description", "Jak zmysły odbierają dźwięk i obraz — doświadczenia z percepcją."),
    ("seo.quiz.title", "Quiz fizyczny"),
    ("seo.quiz.description", "Sprawdź swoją wiedzę w quizach o elektryczności, kosmosie i mikroświecie."),
    ("seo.facts.title", "Ciekawostka dnia"),
    ("seo.facts.description", "Codzienna porcja fizycznych ciekawostek."),
    ("seo.scale.title", "Skala Wszechświata"),
    ("seo.scale.description", "Od protonu po obserwowalny Wszechświat — podróż przez rzędy wielkości."),
    ("seo.notfound.title", "Nie znaleziono strony"),
    ("seo.notfound.description", "Strona o podanym adresie nie istnieje."),
    // --- Controls ---
    ("control.play", "Start"),
    ("control.pause", "Pauza"),
    ("control.reset", "Od nowa"),
    ("control.speed", "Tempo"),
    // --- Sliders ---
    ("param.voltage", "Napięcie (V)"),
    ("param.frequency", "Częstotliwość (Hz)"),
    ("param.amplitude", "Amplituda"),
    ("param.ball_speed", "Prędkość kuli"),
    ("param.orbit_speed", "Tempo orbit"),
    ("param.length", "Długość (m)"),
    ("param.electron_count", "Liczba elektronów"),
    ("param.rotation_speed", "Tempo obrotu"),
    ("param.zoom_exponent", "Skala (potęga 10)"),
    // --- Readouts ---
    ("readout.drift_speed", "Prędkość dryfu"),
    ("readout.current", "Natężenie chwilowe"),
    ("readout.kinetic_energy", "Energia kinetyczna"),
    ("readout.period", "Okres"),
    ("readout.inner_period", "Okres pierwszej planety"),
    ("readout.atomic_number", "Liczba atomowa"),
    ("readout.zoom", "Bieżąca skala"),
    // --- Scale catalog ---
    ("scale.proton", "Proton"),
    ("scale.atom", "Atom"),
    ("scale.virus", "Wirus"),
    ("scale.bacterium", "Bakteria"),
    ("scale.sand_grain", "Ziarnko piasku"),
    ("scale.human", "Człowiek"),
    ("scale.blue_whale", "Płetwal błękitny"),
    ("scale.everest", "Mount Everest"),
    ("scale.earth", "Ziemia"),
    ("scale.sun", "Słońce"),
    ("scale.solar_system", "Układ Słoneczny"),
    ("scale.galaxy", "Droga Mleczna"),
    ("scale.universe", "Obserwowalny Wszechświat"),
    // --- Quiz ---
    ("quiz.progress", "Pytanie {current} z {total}"),
    ("quiz.score", "Wynik: {score}/{total}"),
    // --- Not found ---
    ("notfound.message", "Nie znaleźliśmy takiej strony. Wróć na stronę główną."),
];
