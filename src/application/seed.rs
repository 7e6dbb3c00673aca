//! Sample portal content loaded at startup.

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::domain::foundation::{
    ClientId, DomainError, EngagementStatus, EntityBuilder, ServiceId, Timestamp,
};
use crate::domain::portal::{
    ChatMessage, ClientService, Document, Meeting, NewClientService, NewEpisode, PodcastEpisode,
    ScopeItem, TimelineEvent,
};
use crate::ports::{ClientServiceRepository, PodcastRepository};

use super::CommandGate;

const CHANNEL_URL: &str = "https://www.youtube.com/@anaconecta";

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub episodes: usize,
    pub services: usize,
}

/// Loads the sample podcast episodes and the example service.
///
/// Runs at most once per seeder; later calls return the first report.
pub struct SampleDataSeeder {
    podcasts: Arc<dyn PodcastRepository>,
    services: Arc<dyn ClientServiceRepository>,
    gate: CommandGate,
    done: OnceCell<SeedReport>,
}

impl SampleDataSeeder {
    pub fn new(
        podcasts: Arc<dyn PodcastRepository>,
        services: Arc<dyn ClientServiceRepository>,
        gate: CommandGate,
    ) -> Self {
        Self {
            podcasts,
            services,
            gate,
            done: OnceCell::new(),
        }
    }

    pub async fn seed(&self) -> Result<SeedReport, DomainError> {
        self.done
            .get_or_try_init(|| self.run())
            .await
            .copied()
    }

    async fn run(&self) -> Result<SeedReport, DomainError> {
        let _guard = self.gate.enter().await;
        let mut report = SeedReport::default();

        for input in sample_episodes()? {
            self.podcasts
                .insert_with(Box::new(move |id| PodcastEpisode::new(id, input)))
                .await?;
            report.episodes += 1;
        }

        let no_services = self.services.find_all().await?.is_empty();
        let has_episodes = !self.podcasts.find_all().await?.is_empty();
        if no_services && has_episodes {
            let example = example_service()?;
            self.services.insert_with(example).await?;
            report.services += 1;
        }

        tracing::info!(
            episodes = report.episodes,
            services = report.services,
            "Sample data loaded"
        );
        Ok(report)
    }
}

fn sample_episodes() -> Result<Vec<NewEpisode>, DomainError> {
    let episodes = vec![
        NewEpisode::new(
            "Minha jornada em RH - Com Patricia Rocha",
            "Patricia Rocha compartilha sua trajetória no mundo de Recursos Humanos e insights valiosos sobre o desenvolvimento deste campo ao longo dos anos.",
            "2025-04-15",
            CHANNEL_URL,
            "Neste episódio, Patricia Rocha, experiente profissional de RH, compartilha sua jornada de mais de 20 anos na área. Ela aborda a evolução das práticas de RH, a importância do desenvolvimento humano nas organizações e como o papel de RH passou de administrativo para estratégico.",
        )?,
        NewEpisode::new(
            "Uma Ponte para Você - Com Nivea Oliveira",
            "Uma conversa inspiradora sobre transições de carreira e a importância de construir pontes para novos caminhos profissionais.",
            "2025-03-28",
            CHANNEL_URL,
            "Nivea Oliveira, especialista em transição de carreira, compartilha sua metodologia 'Uma Ponte para Você'. Ela discute autoconhecimento, competências transferíveis e networking estratégico, com exemplos reais de pessoas que reinventaram suas carreiras.",
        )?,
        NewEpisode::new(
            "Até onde as conexões podem nos levar? - Com Janine Alcure e Andréia Xavier",
            "Uma análise do poder das conexões genuínas e como elas podem transformar carreiras e negócios.",
            "2025-03-10",
            CHANNEL_URL,
            "Janine Alcure e Andréia Xavier discutem como construir e manter conexões profissionais significativas, a diferença entre networking quantitativo e qualitativo e como as redes sociais transformaram o networking.",
        )?,
    ];
    Ok(episodes)
}

/// Validates every record up front and returns a builder for the
/// "Mentoria em Liderança" example service.
fn example_service() -> Result<EntityBuilder<ClientService, ServiceId>, DomainError> {
    let input = NewClientService::new(
        "Mentoria em Liderança",
        ClientId::new(1),
        EngagementStatus::InProgress.into(),
        "Programa de mentoria focado em desenvolvimento de habilidades de liderança.",
    )?;

    let scope = vec![
        ScopeItem::new(
            "Avaliação de Perfil de Liderança",
            "Diagnóstico do perfil de liderança atual e identificação de pontos fortes e áreas de desenvolvimento.",
        )?,
        ScopeItem::new(
            "Desenvolvimento de Habilidades",
            "Sessões focadas em comunicação, delegação, feedback, gerenciamento de conflitos e desenvolvimento de equipes.",
        )?,
        ScopeItem::new(
            "Plano de Ação Individual",
            "Elaboração de plano de desenvolvimento individual com metas e ações específicas.",
        )?,
    ];
    let meetings = vec![
        Meeting::new("2025-05-10", "Introdução e Definição de Objetivos", None)?,
        Meeting::new("2025-05-17", "Estilos de Liderança e Autoconhecimento", None)?,
    ];
    let documents = vec![
        Document::new("proposal", "Proposta_Mentoria_Lideranca.pdf", None)?,
        Document::new("contract", "Contrato_Mentoria_Lideranca.pdf", None)?,
    ];
    let chat = vec![
        ChatMessage::new("client", "Olá Ana, gostaria de mais informações sobre o programa de mentoria em liderança.")?,
        ChatMessage::new("mentor", "Olá! Claro, o programa de mentoria em liderança é personalizado para suas necessidades específicas. Podemos agendar uma conversa inicial para entender melhor seus objetivos?")?,
        ChatMessage::new("client", "Seria ótimo! Tenho disponibilidade na próxima semana.")?,
        ChatMessage::new("mentor", "Perfeito! Podemos marcar para segunda-feira às 14h?")?,
        ChatMessage::new("client", "Confirmado, estarei disponível nesse horário.")?,
    ];
    let timeline = vec![
        TimelineEvent::new(
            "Solicitação de Serviço",
            "Solicitação inicial de mentoria em liderança.",
            Timestamp::parse_iso("2025-05-05T10:00:00"),
        )?,
        TimelineEvent::new(
            "Proposta Enviada",
            "Proposta personalizada enviada para aprovação.",
            Timestamp::parse_iso("2025-05-07T15:30:00"),
        )?,
        TimelineEvent::new(
            "Contrato Assinado",
            "Contrato assinado e primeira sessão agendada.",
            Timestamp::parse_iso("2025-05-09T11:45:00"),
        )?,
    ];

    Ok(Box::new(move |id| {
        let mut service = ClientService::new(id, input);
        scope.into_iter().for_each(|item| service.add_scope_item(item));
        meetings.into_iter().for_each(|m| service.add_meeting(m));
        documents.into_iter().for_each(|d| service.add_document(d));
        chat.into_iter().for_each(|m| service.add_chat_message(m));
        timeline.into_iter().for_each(|e| service.add_timeline_event(e));
        service.set_price("R$ 1.800,00".to_string(), 3);
        service
    }))
}
