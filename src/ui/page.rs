/// The chat page. Rendering is driven entirely by the two sequences the UI
/// process serves from `/history`; the page itself keeps no state of its
/// own beyond what is on screen.
pub const CHAT_PAGE: &str = r###"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Chatbot</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            color: #e8e8e8;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f1419 100%);
            background-attachment: fixed;
            height: 100vh;
            display: flex;
            justify-content: center;
        }

        .chat-container {
            width: 100%;
            max-width: 720px;
            height: 100vh;
            display: flex;
            flex-direction: column;
            padding: 1rem;
        }

        .chat-header {
            text-align: center;
            padding: 1rem 0;
            border-bottom: 1px solid rgba(59, 130, 246, 0.3);
        }

        .chat-header h1 {
            font-size: 1.5rem;
            color: white;
        }

        .messages {
            flex: 1;
            overflow-y: auto;
            padding: 1rem 0;
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }

        .message {
            max-width: 80%;
            padding: 0.75rem 1rem;
            border-radius: 16px;
            line-height: 1.5;
            white-space: pre-wrap;
            word-break: break-word;
        }

        .message.user {
            align-self: flex-end;
            background: rgba(59, 130, 246, 0.85);
            color: white;
            border-bottom-right-radius: 4px;
        }

        .message.bot {
            align-self: flex-start;
            background: rgba(255, 255, 255, 0.1);
            border-bottom-left-radius: 4px;
        }

        .spinner {
            align-self: flex-start;
            font-style: italic;
            color: #9ca3af;
            padding: 0.25rem 1rem;
        }

        .hidden {
            display: none;
        }

        .chat-form {
            display: flex;
            gap: 0.5rem;
            padding: 1rem 0;
            border-top: 1px solid rgba(59, 130, 246, 0.3);
        }

        .chat-form input {
            flex: 1;
            padding: 0.75rem 1rem;
            border-radius: 24px;
            border: 1px solid rgba(59, 130, 246, 0.4);
            background: rgba(255, 255, 255, 0.05);
            color: #e8e8e8;
            font-size: 1rem;
            outline: none;
        }

        .chat-form input:focus {
            border-color: rgba(59, 130, 246, 0.9);
        }

        .chat-form button {
            padding: 0.75rem 1.5rem;
            border-radius: 24px;
            border: none;
            background: #3b82f6;
            color: white;
            font-size: 1rem;
            cursor: pointer;
        }

        .chat-form button:disabled {
            background: #374151;
            cursor: wait;
        }
    </style>
</head>
<body>
    <div class="chat-container">
        <header class="chat-header">
            <h1>🤖 Chatbot Interactivo</h1>
        </header>
        <main class="messages" id="messages"></main>
        <div class="spinner hidden" id="spinner">Generando respuesta...</div>
        <form class="chat-form" id="chat-form">
            <input type="text" id="prompt" placeholder="¿En qué puedo ayudarte?" autocomplete="off" autofocus>
            <button type="submit" id="send-button">Enviar</button>
        </form>
    </div>

    <script>
        const messages = document.getElementById('messages');
        const spinner = document.getElementById('spinner');
        const form = document.getElementById('chat-form');
        const input = document.getElementById('prompt');
        const sendButton = document.getElementById('send-button');

        function appendMessage(text, who) {
            const bubble = document.createElement('div');
            bubble.className = 'message ' + who;
            bubble.textContent = text;
            messages.appendChild(bubble);
            messages.scrollTop = messages.scrollHeight;
        }

        async function loadHistory() {
            try {
                const response = await fetch('/history');
                const history = await response.json();
                for (let i = 0; i < history.prompts.length; i++) {
                    appendMessage(history.prompts[i], 'user');
                    if (i < history.replies.length) {
                        appendMessage(history.replies[i], 'bot');
                    }
                }
            } catch (err) {
                // Nothing to restore; start with an empty conversation.
            }
        }

        form.addEventListener('submit', async (event) => {
            event.preventDefault();
            const prompt = input.value;
            if (!prompt) {
                return;
            }
            input.value = '';
            input.disabled = true;
            sendButton.disabled = true;
            appendMessage(prompt, 'user');
            spinner.classList.remove('hidden');

            try {
                const response = await fetch('/send', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ prompt }),
                });
                const data = await response.json();
                appendMessage(data.reply, 'bot');
            } catch (err) {
                appendMessage('Error al comunicarse con el servidor.', 'bot');
            }

            spinner.classList.add('hidden');
            input.disabled = false;
            sendButton.disabled = false;
            input.focus();
        });

        loadHistory();
    </script>
</body>
</html>
"###;
