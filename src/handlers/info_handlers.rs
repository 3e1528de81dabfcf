use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct IndexResponse {
    message: String,
    version: String,
    endpoints: EndpointIndex,
}

#[derive(Serialize, Deserialize)]
pub struct EndpointIndex {
    explain: String,
    health: String,
}

/// Descriptive landing document for `GET /`.
pub async fn index() -> impl Responder {
    let response = IndexResponse {
        message: "OneClickToKnow API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointIndex {
            explain: "POST /api/explain".to_string(),
            health: "GET /api/health".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Static privacy-policy page for `GET /privacy`, required by the extension
/// store listing. Fixed French content, no templating.
pub async fn privacy_policy() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(PRIVACY_POLICY_HTML)
}

const PRIVACY_POLICY_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Politique de Confidentialité - OneClickToKnow</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
            background: #f5f5f5;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1, h2 { color: #333; }
        h1 { color: #667eea; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Politique de Confidentialité - OneClickToKnow</h1>
        <p><strong>Dernière mise à jour :</strong> 4 octobre 2025</p>

        <h2>1. Données collectées</h2>
        <p>Notre extension OneClickToKnow ne collecte aucune donnée personnelle identifiable.</p>

        <h2>2. Traitement du texte</h2>
        <p>Lorsque vous sélectionnez du texte et demandez une explication :</p>
        <ul>
            <li>Le texte sélectionné est envoyé temporairement à notre API</li>
            <li>Aucune donnée personnelle n'est transmise</li>
            <li>Le texte n'est pas stocké de manière permanente</li>
        </ul>

        <h2>3. Utilisation des données</h2>
        <p>Le texte sélectionné est uniquement utilisé pour générer une explication via l'IA.</p>

        <h2>4. Partage des données</h2>
        <p>Nous ne partageons aucune donnée avec des tiers.</p>

        <h2>5. Sécurité</h2>
        <p>Toutes les communications sont sécurisées via HTTPS.</p>

        <h2>6. Contact</h2>
        <p>Pour toute question : support@oneclicktoknow.com</p>
    </div>
</body>
</html>
"#;
